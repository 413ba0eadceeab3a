use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run_with_stdin, stderr, stdout};

const PAGE_PATH: &str = "src/pages/admin/AdminDashboard.jsx";

const PAGE: &str = r#"import React from 'react';
import { Link } from 'react-router-dom';

const AdminDashboard = () => {
    const handleSave = () => toast.success('Save Settings');
    return (
        <div className="page">
            <input placeholder="Enter your name" />
            <button>{'Save Settings'}</button>
        </div>
    );
};

export default AdminDashboard;
"#;

const REWRITTEN: &str = r#"import React from 'react';
import { Link } from 'react-router-dom';
import { useLanguage } from '../../contexts/LanguageContext';

const AdminDashboard = () => {
    const { t } = useLanguage();
    const handleSave = () => toast.success(t('dashboard.saveSettings'));
    return (
        <div className="page">
            <input placeholder={t('dashboard.enterYourName')} />
            <button>{t('dashboard.saveSettings')}</button>
        </div>
    );
};

export default AdminDashboard;
"#;

const GLOSSARY: &str = r#"{
  "Save Settings": "Enregistrer les paramètres",
  "Enter your name": "Entrez votre nom"
}"#;

#[test]
fn test_extract_yes_rewrites_and_backs_up() -> Result<()> {
    let test = CliTest::with_file(PAGE_PATH, PAGE)?;

    let output = test.extract_command().args([PAGE_PATH, "--yes"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("namespace: dashboard"));
    assert!(out.contains("Found 2 string(s) to translate (en → fr)"));
    assert!(out.contains("Updated src/pages/admin/AdminDashboard.jsx (3 literal(s) replaced)"));

    assert_eq!(test.read_file(PAGE_PATH)?, REWRITTEN);
    assert_eq!(
        test.read_file("src/pages/admin/AdminDashboard.jsx.backup")?,
        PAGE
    );

    Ok(())
}

#[test]
fn test_extract_writes_both_tables() -> Result<()> {
    let test = CliTest::with_file(PAGE_PATH, PAGE)?;
    test.write_file("glossary.fr.json", GLOSSARY)?;

    let output = test
        .extract_command()
        .args([PAGE_PATH, "--glossary", "glossary.fr.json", "--dry-run"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("provider:  glossary"));

    assert_eq!(
        test.read_file("translation_output/dashboard_en.txt")?,
        "    // Dashboard Page
    dashboard: {
        saveSettings: 'Save Settings',
        enterYourName: 'Enter your name',
    }"
    );
    assert_eq!(
        test.read_file("translation_output/dashboard_fr.txt")?,
        "    // Dashboard Page
    dashboard: {
        saveSettings: 'Enregistrer les paramètres',
        enterYourName: 'Entrez votre nom',
    }"
    );

    Ok(())
}

#[test]
fn test_extract_json_format_and_explicit_namespace() -> Result<()> {
    let test = CliTest::with_file(PAGE_PATH, PAGE)?;

    let output = test
        .extract_command()
        .args([PAGE_PATH, "settings", "--format", "json", "--dry-run"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let fr: serde_json::Value =
        serde_json::from_str(&test.read_file("translation_output/settings_fr.json")?)?;
    assert_eq!(fr["settings"]["saveSettings"], "Save Settings");
    assert_eq!(fr["settings"]["enterYourName"], "Enter your name");

    Ok(())
}

#[test]
fn test_extract_missing_glossary_entry_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file(PAGE_PATH, PAGE)?;
    test.write_file(
        "glossary.fr.json",
        r#"{ "Save Settings": "Enregistrer les paramètres" }"#,
    )?;

    let output = test
        .extract_command()
        .args([PAGE_PATH, "--glossary", "glossary.fr.json", "--dry-run"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("1 string(s) kept their en text in the fr table"));

    let fr = test.read_file("translation_output/dashboard_fr.txt")?;
    assert!(fr.contains("enterYourName: 'Enter your name',"));

    Ok(())
}

#[test]
fn test_extract_dry_run_leaves_source_untouched() -> Result<()> {
    let test = CliTest::with_file(PAGE_PATH, PAGE)?;

    let output = test.extract_command().args([PAGE_PATH, "--dry-run"]).output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("Dry run: src/pages/admin/AdminDashboard.jsx would be rewritten"));
    assert!(out.contains("insert-import"));
    assert!(out.contains("replace-literal"));
    assert_eq!(test.read_file(PAGE_PATH)?, PAGE);
    assert!(!test.exists("src/pages/admin/AdminDashboard.jsx.backup"));

    Ok(())
}

#[test]
fn test_extract_declined_prompt_keeps_source() -> Result<()> {
    let test = CliTest::with_file(PAGE_PATH, PAGE)?;

    let mut cmd = test.extract_command();
    cmd.arg(PAGE_PATH);
    let output = run_with_stdin(cmd, "n\n")?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("with translation calls? (y/n): "));
    assert!(out.contains("Skipped rewriting"));
    assert_eq!(test.read_file(PAGE_PATH)?, PAGE);
    assert!(test.exists("translation_output/dashboard_fr.txt"));

    Ok(())
}

#[test]
fn test_extract_confirmed_prompt_rewrites() -> Result<()> {
    let test = CliTest::with_file(PAGE_PATH, PAGE)?;

    let mut cmd = test.extract_command();
    cmd.arg(PAGE_PATH);
    let output = run_with_stdin(cmd, "y\n")?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file(PAGE_PATH)?, REWRITTEN);

    Ok(())
}

#[test]
fn test_extract_second_run_is_up_to_date() -> Result<()> {
    let test = CliTest::with_file(PAGE_PATH, PAGE)?;

    let first = test.extract_command().args([PAGE_PATH, "--yes"]).output()?;
    assert_eq!(first.status.code(), Some(0));

    // Only accessor arguments remain, so nothing is left to extract.
    let second = test.extract_command().args([PAGE_PATH, "--yes"]).output()?;
    assert_eq!(second.status.code(), Some(1));
    assert!(stdout(&second).contains("No extractable strings found"));
    assert_eq!(test.read_file(PAGE_PATH)?, REWRITTEN);

    Ok(())
}

#[test]
fn test_extract_no_strings_is_failure() -> Result<()> {
    let test = CliTest::with_file(
        "src/Empty.jsx",
        "import React from 'react';\nconst Empty = () => <div className=\"box\" />;\n",
    )?;

    let output = test.extract_command().args(["src/Empty.jsx", "--yes"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("No extractable strings found in src/Empty.jsx"));
    assert!(!test.exists("translation_output"));

    Ok(())
}

#[test]
fn test_extract_missing_file_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().args(["src/Missing.jsx", "--yes"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read file"));

    Ok(())
}

#[test]
fn test_extract_without_component_warns_about_binding() -> Result<()> {
    let test = CliTest::with_file(
        "src/labels.js",
        "export const LABEL = 'Welcome back';\n",
    )?;

    let output = test
        .extract_command()
        .args(["src/labels.js", "labels", "--yes"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("no zero-argument component found"));

    let content = test.read_file("src/labels.js")?;
    assert!(content.contains("export const LABEL = t('labels.welcomeBack');"));

    Ok(())
}

#[test]
fn test_extract_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(PAGE_PATH, PAGE)?;
    test.write_file(
        ".locswaprc.json",
        r#"{ "destLocale": "de", "outputDir": "i18n", "hook": "useI18n", "importSource": "@/i18n" }"#,
    )?;

    let output = test.extract_command().args([PAGE_PATH, "--yes"]).output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(test.exists("i18n/dashboard_de.txt"));

    let content = test.read_file(PAGE_PATH)?;
    assert!(content.contains("import { useI18n } from '@/i18n';"));
    assert!(content.contains("const { t } = useI18n();"));

    Ok(())
}

#[test]
fn test_extract_same_locales_is_error() -> Result<()> {
    let test = CliTest::with_file(PAGE_PATH, PAGE)?;

    let output = test
        .extract_command()
        .args([PAGE_PATH, "--dest-locale", "en", "--yes"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("must differ"));

    Ok(())
}
