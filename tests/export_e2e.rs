// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use card_pricer::card::CardRecord;
use card_pricer::config::options::{ExportFormat, ExportOptions};
use card_pricer::file::{self, to_export_string};
use card_pricer::scrape::PriceResult;
use card_pricer::table::{is_bargain, PriceTable};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("card_pricer_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn priced(avg: Option<f64>, low: Option<f64>) -> PriceResult {
    PriceResult { average_sold_price: avg, lowest_listing_price: low, error: None }
}

fn sample_table() -> PriceTable {
    let cards = vec![
        CardRecord {
            name: "Charizard".into(),
            set: "Base Set".into(),
            number: "4".into(),
            edition: "Unlimited".into(),
            holo: true,
            condition: "LP".into(),
        },
        CardRecord { name: "Mew, promo".into(), ..Default::default() },
        CardRecord { name: "Ghost".into(), ..Default::default() },
    ];
    let results = vec![
        priced(Some(100.0), Some(70.0)),
        priced(Some(100.0), Some(85.0)),
        PriceResult { error: Some("sold prices: Status code 503".into()), ..Default::default() },
    ];
    PriceTable::build(&cards, results)
}

#[test]
fn bargain_highlight_cases() {
    assert!(is_bargain(Some(100.0), Some(70.0)));
    assert!(!is_bargain(Some(100.0), Some(85.0)));
    assert!(!is_bargain(None, Some(5.0)));
    assert!(!is_bargain(Some(100.0), None));
    assert!(!is_bargain(None, None));

    let table = sample_table();
    let flags: Vec<bool> = table.rows.iter().map(|r| r.bargain).collect();
    assert_eq!(flags, vec![true, false, false]);
    assert_eq!(table.bargain_count(), 1);
}

#[test]
fn csv_export_with_headers() {
    let dir = tmp_dir("csv");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("prices").to_str().unwrap());

    let path = file::write_export(&opts, &sample_table()).unwrap();
    assert!(path.to_string_lossy().ends_with("prices.csv"));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "name,set,number,edition,holo,condition,average_sold_price,lowest_listing_price,error"
    );
    assert_eq!(lines[1], "Charizard,Base Set,4,Unlimited,true,LP,100,70,");
    assert_eq!(lines[2], "\"Mew, promo\",,,,false,,100,85,");
    assert_eq!(lines[3], "Ghost,,,,false,,,,sold prices: Status code 503");
    assert_eq!(lines.len(), 4);
}

#[test]
fn tsv_export_without_headers() {
    let dir = tmp_dir("tsv");
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;
    opts.set_path(dir.join("nested").join("out").to_str().unwrap());

    let path = file::write_export(&opts, &sample_table()).unwrap();
    assert!(path.to_string_lossy().ends_with("out.tsv"));

    let text = fs::read_to_string(&path).unwrap();
    let first = text.lines().next().unwrap();
    assert!(first.starts_with("Charizard\tBase Set\t4"));
    assert!(text.contains("Mew, promo\t"));
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn typed_extension_survives_format_change() {
    let dir = tmp_dir("ext");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("hello.txt").to_str().unwrap());
    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with("hello.txt"));

    let path = file::write_export(&opts, &sample_table()).unwrap();
    assert!(fs::read_to_string(path).unwrap().contains('\t'));
}

#[test]
fn file_in_place_of_directory_is_rejected() {
    let dir = tmp_dir("notdir");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "x").unwrap();

    let mut opts = ExportOptions::default();
    opts.set_path(blocker.join("prices.csv").to_str().unwrap());
    assert!(file::write_export(&opts, &sample_table()).is_err());
}

#[test]
fn export_keeps_full_precision() {
    let cards = vec![CardRecord { name: "Mew".into(), ..Default::default() }];
    let avg = (10.0 + 10.0 + 11.0) / 3.0;
    let table = PriceTable::build(&cards, vec![priced(Some(avg), Some(9.99))]);

    let mut opts = ExportOptions::default();
    opts.include_headers = false;
    let text = to_export_string(&opts, &table);
    assert_eq!(text, format!("Mew,,,,false,,{},9.99,\n", avg));
    assert!(!text.contains(",10.33,"));

    // the on-screen table still rounds
    assert_eq!(table.to_rows()[0][6], "10.33");
}

#[test]
fn copy_text_matches_export_text() {
    let dir = tmp_dir("copy");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("prices.csv").to_str().unwrap());

    let table = sample_table();
    let path = file::write_export(&opts, &table).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), to_export_string(&opts, &table));
}
