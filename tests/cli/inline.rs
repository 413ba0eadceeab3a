use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const TABLE: &str = r#"{
  "dashboard": {
    "saveSettings": "Enregistrer les paramètres",
    "enterYourName": "Entrez votre nom"
  }
}"#;

const DASHBOARD: &str = r#"import React from 'react';
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

const DASHBOARD_INLINED: &str = r#"import React from 'react';
// useLanguage import removed: using hardcoded text

const AdminDashboard = () => {
    // Localization binding removed: using hardcoded text
    const handleSave = () => toast.success("Enregistrer les paramètres");
    return (
        <div className="page">
            <input placeholder="Entrez votre nom" />
            <button>{"Enregistrer les paramètres"}</button>
        </div>
    );
};

export default AdminDashboard;
"#;

const HERO: &str = r#"import { useLanguage } from '../contexts/LanguageContext';

function Hero() {
    const { t } = useLanguage();
    return <h1>{t('hero.welcomeBack') || 'Welcome back'}</h1>;
}
"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("fr.json", TABLE)?;
    test.write_file("src/pages/admin/AdminDashboard.jsx", DASHBOARD)?;
    test.write_file("src/components/Hero.jsx", HERO)?;
    test.write_file("src/styles.css", ".page { color: red; }\n")?;
    Ok(test)
}

#[test]
fn test_inline_directory_batch() -> Result<()> {
    let test = project()?;

    let output = test
        .inline_command()
        .args(["src", "--table", "fr.json"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("Converted src/pages/admin/AdminDashboard.jsx (3 call(s) inlined)"));
    assert!(out.contains("Converted src/components/Hero.jsx (1 call(s) inlined)"));
    assert!(out.contains("Converted 2/2 file(s)"));

    assert_eq!(
        test.read_file("src/pages/admin/AdminDashboard.jsx")?,
        DASHBOARD_INLINED
    );
    assert!(
        test.read_file("src/components/Hero.jsx")?
            .contains("return <h1>{\"Welcome back\"}</h1>;")
    );
    assert_eq!(
        test.read_file("src/pages/admin/AdminDashboard.jsx.backup")?,
        DASHBOARD
    );
    assert_eq!(test.read_file("src/styles.css")?, ".page { color: red; }\n");

    Ok(())
}

#[test]
fn test_inline_second_run_is_already_converted() -> Result<()> {
    let test = project()?;

    let first = test
        .inline_command()
        .args(["src/components/Hero.jsx", "--table", "fr.json"])
        .output()?;
    assert_eq!(first.status.code(), Some(0));
    let converted = test.read_file("src/components/Hero.jsx")?;

    let second = test
        .inline_command()
        .args(["src/components/Hero.jsx", "--table", "fr.json"])
        .output()?;
    assert_eq!(second.status.code(), Some(0));
    assert!(stdout(&second).contains("src/components/Hero.jsx already converted"));
    assert_eq!(test.read_file("src/components/Hero.jsx")?, converted);

    Ok(())
}

#[test]
fn test_inline_missing_path_fails_but_converts_others() -> Result<()> {
    let test = project()?;

    let output = test
        .inline_command()
        .args([
            "src/components/Hero.jsx",
            "src/Missing.jsx",
            "--table",
            "fr.json",
        ])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error converting src/Missing.jsx: file not found"));
    assert!(stdout(&output).contains("Converted 1/2 file(s)"));
    assert!(test.exists("src/components/Hero.jsx.backup"));

    Ok(())
}

#[test]
fn test_inline_dry_run_writes_nothing() -> Result<()> {
    let test = project()?;

    let output = test
        .inline_command()
        .args(["src", "--table", "fr.json", "--dry-run"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("Dry run: src/pages/admin/AdminDashboard.jsx (3 call(s) to inline)"));
    assert!(out.contains("inline-calls"));
    assert_eq!(test.read_file("src/pages/admin/AdminDashboard.jsx")?, DASHBOARD);
    assert!(!test.exists("src/pages/admin/AdminDashboard.jsx.backup"));

    Ok(())
}

#[test]
fn test_inline_key_fallback_override() -> Result<()> {
    let test = CliTest::with_file("fr.json", "{}")?;
    test.write_file(
        "src/Banner.jsx",
        "const Banner = () => <p>{t('banner.comingSoon')}</p>;\n",
    )?;

    let output = test
        .inline_command()
        .args(["src/Banner.jsx", "--table", "fr.json", "--fallback", "key"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("src/Banner.jsx")?,
        "const Banner = () => <p>{\"banner.comingSoon\"}</p>;\n"
    );

    Ok(())
}

#[test]
fn test_inline_title_case_fallback_by_default() -> Result<()> {
    let test = CliTest::with_file("fr.json", "{}")?;
    test.write_file(
        "src/Banner.jsx",
        "const Banner = () => <p>{t('banner.comingSoon')}</p>;\n",
    )?;

    let output = test
        .inline_command()
        .args(["src/Banner.jsx", "--table", "fr.json"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("src/Banner.jsx")?,
        "const Banner = () => <p>{\"Coming Soon\"}</p>;\n"
    );

    Ok(())
}

#[test]
fn test_inline_invalid_table_is_error() -> Result<()> {
    let test = project()?;
    test.write_file("bad.json", r#"{ "count": 3 }"#)?;

    let output = test
        .inline_command()
        .args(["src", "--table", "bad.json"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse translation table"));
    assert_eq!(test.read_file("src/components/Hero.jsx")?, HERO);

    Ok(())
}

#[test]
fn test_inline_no_matching_files_is_failure() -> Result<()> {
    let test = CliTest::with_file("fr.json", TABLE)?;
    test.write_file("assets/site.css", ".page { color: red; }\n")?;

    let output = test
        .inline_command()
        .args(["assets", "--table", "fr.json"])
        .output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no source files matched"));

    Ok(())
}
