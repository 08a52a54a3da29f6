use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use barcodekit::prelude::*;
use clap::Parser as _;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Проверка штрих-кодов EAN-13/EAN-8 (длина, цифры, контрольная цифра).
#[derive(Debug, clap::Parser)]
#[command(name = "barcode_check")]
#[command(about = "Проверить коды EAN-13 / EAN-8")]
struct Cli {
    /// Коды для проверки.
    codes: Vec<String>,

    /// Читать коды из stdin, по одному на строку.
    #[arg(long)]
    stdin: bool,

    /// Принимать только одну символогию (ean13 | ean8).
    #[arg(long, value_parser = parse_symbology)]
    only: Option<Symbology>,

    /// Вывод в JSON, по объекту на строку.
    #[arg(long)]
    json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn parse_symbology(s: &str) -> Result<Symbology, String> {
    s.parse().map_err(|e: BarcodeError| e.to_string())
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    code: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbology: Option<Symbology>,
    #[serde(skip_serializing_if = "Option::is_none")]
    standard_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> Report<'a> {
    fn new(code: &'a str, res: &Result<Barcode, BarcodeError>) -> Self {
        match res {
            Ok(b) => Self {
                code,
                valid: true,
                symbology: Some(b.symbology()),
                standard_name: Some(b.standard_name()),
                error: None,
            },
            Err(e) => Self {
                code,
                valid: false,
                symbology: None,
                standard_name: None,
                error: Some(e.to_string()),
            },
        }
    }
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("barcodekit=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("barcodekit=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Ошибка: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let mut codes = cli.codes.clone();
    if cli.stdin {
        for line in io::stdin().lock().lines() {
            codes.push(line.context("чтение stdin")?);
        }
    }
    check_codes(cli, &codes, &mut io::stdout().lock())
}

/// Проверить коды и напечатать отчёт в `out`, по строке на код.
/// Возвращает `true`, если все коды валидны; пустой ввод — ошибка.
fn check_codes(cli: &Cli, codes: &[String], out: &mut impl Write) -> anyhow::Result<bool> {
    let opts = cli.only.map_or_else(ParseOptions::default, ParseOptions::only);
    let parser = Parser::with_options(opts);

    let codes: Vec<&str> = codes
        .iter()
        .map(String::as_str)
        .filter(|c| !c.trim().is_empty())
        .collect();
    if codes.is_empty() {
        anyhow::bail!("нет кодов: передайте аргументы или --stdin");
    }
    tracing::debug!(count = codes.len(), symbologies = ?parser.symbologies(), "checking");

    let mut all_valid = true;
    for raw in codes {
        let code = raw.trim();
        let res = parser.parse(raw);
        all_valid &= res.is_ok();
        if cli.json {
            let line = serde_json::to_string(&Report::new(code, &res))?;
            writeln!(out, "{line}")?;
        } else {
            match &res {
                Ok(b) => writeln!(out, "{} {} {}", b.symbology(), b.standard_name(), b)?,
                Err(e) => writeln!(out, "invalid {code}: {e}")?,
            }
        }
    }
    Ok(all_valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("barcode_check").chain(args.iter().copied())).unwrap()
    }

    fn check(args: &[&str]) -> (anyhow::Result<bool>, String) {
        let c = cli(args);
        let mut out = Vec::new();
        let res = check_codes(&c, &c.codes, &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn all_valid_prints_metadata_lines() {
        let (res, out) = check(&["6410405176059", " 20886509 "]);
        assert!(res.unwrap());
        assert_eq!(
            out,
            "EAN-13 org.gs1.EAN-13 6410405176059\nEAN-8 org.gs1.EAN-8 20886509\n"
        );
    }

    #[test]
    fn mixed_input_reports_invalid_and_fails() {
        let (res, out) = check(&["6410405176059", "12345678"]);
        assert!(!res.unwrap());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "EAN-13 org.gs1.EAN-13 6410405176059");
        assert!(lines[1].starts_with("invalid 12345678: checksum mismatch"), "{}", lines[1]);
    }

    #[test]
    fn empty_input_is_an_error() {
        let (res, out) = check(&[]);
        assert!(res.is_err());
        assert!(out.is_empty());

        let c = cli(&[]);
        let blank = vec!["   ".to_string(), String::new()];
        assert!(check_codes(&c, &blank, &mut Vec::new()).is_err());
    }

    #[test]
    fn only_flag_rejects_other_symbology() {
        let (res, out) = check(&["--only", "ean8", "6410405176059", "20886509"]);
        assert!(!res.unwrap());
        assert!(out.starts_with("invalid 6410405176059: symbology EAN-13 is disabled\n"), "{out}");
        assert!(out.ends_with("EAN-8 org.gs1.EAN-8 20886509\n"));
        assert!(Cli::try_parse_from(["barcode_check", "--only", "qr", "1"]).is_err());
    }

    #[test]
    fn json_lines_have_expected_shape() {
        let (res, out) = check(&["--json", "20886509", "12345678"]);
        assert!(!res.unwrap());
        let rows: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(rows.len(), 2);

        assert_eq!(
            rows[0],
            serde_json::json!({
                "code": "20886509",
                "valid": true,
                "symbology": "EAN-8",
                "standard_name": "org.gs1.EAN-8",
            })
        );

        assert_eq!(rows[1]["code"], "12345678");
        assert_eq!(rows[1]["valid"], false);
        assert!(rows[1].get("symbology").is_none());
        assert!(rows[1].get("standard_name").is_none());
        assert!(rows[1]["error"].as_str().unwrap().contains("checksum"));
    }
}
