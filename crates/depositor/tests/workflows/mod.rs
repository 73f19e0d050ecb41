use super::*;

const FIRST: &str = "https://theodi.org/insights/reports/first/";
const MISSING: &str = "https://theodi.org/insights/reports/missing/";
const BROKEN: &str = "https://theodi.org/insights/reports/broken/";
const LAST: &str = "https://theodi.org/insights/reports/last/";

fn generated_at() -> chrono::NaiveDateTime {
  NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(14, 7, 1).unwrap()
}

#[traced_test]
#[tokio::test]
async fn test_batch_skips_failures_and_keeps_order() {
  let fetcher = StaticFetcher::new()
    .with_page(FIRST, 200, &report_page(Some("First"), None, &[]))
    .with_page(MISSING, 404, "")
    .with_page(LAST, 200, &report_page(Some("Last"), None, &[]));
  let scraper = scraper(fetcher);
  let inputs = [
    InputRecord::new(FIRST, "10.61557/AAAA0001"),
    InputRecord::new(MISSING, "10.61557/BBBB0002"),
    InputRecord::new(BROKEN, "10.61557/CCCC0003"),
    InputRecord::new(LAST, "10.61557/DDDD0004"),
  ];

  let reports = run_batch(&scraper, &inputs).await;

  let dois: Vec<_> = reports.iter().map(|r| r.doi.as_str()).collect();
  assert_eq!(dois, ["10.61557/AAAA0001", "10.61557/DDDD0004"]);
  assert_eq!(reports[1].title, "Last");
  // every input was attempted, in input order
  assert_eq!(scraper.fetcher().requests(), [FIRST, MISSING, BROKEN, LAST]);
}

#[tokio::test]
async fn test_empty_batch() {
  let scraper = scraper(StaticFetcher::new());
  assert!(run_batch(&scraper, &[]).await.is_empty());
  assert!(scraper.fetcher().requests().is_empty());
}

#[traced_test]
#[tokio::test]
async fn test_end_to_end_deposit() -> TestResult<()> {
  let report_url = "https://theodi.org/insights/reports/example-report/";
  let fetcher = StaticFetcher::new()
    .with_page(
      report_url,
      200,
      &report_page(Some("Example Report"), Some("2024-03-05"), &[
        r#"<a href="/people/jane-doe/">Jane Doe</a>"#,
      ]),
    )
    .with_page(
      "https://theodi.org/people/jane-doe/",
      200,
      &profile_page(Some("https://orcid.org/0000-0001-2345-6789")),
    );
  let scraper = scraper(fetcher);
  let config = Config {
    records: vec![InputRecord::new(report_url, "10.61557/TEST0001")],
    ..Config::default()
  };

  let reports = run_batch(&scraper, &config.records).await;
  assert_eq!(reports, vec![ReportRecord {
    doi:              "10.61557/TEST0001".into(),
    url:              report_url.into(),
    title:            "Example Report".into(),
    publication_date: NaiveDate::from_ymd_opt(2024, 3, 5),
    authors:          vec![AuthorRecord {
      given_name:  "Jane".into(),
      family_name: "Doe".into(),
      orcid:       Some("https://orcid.org/0000-0001-2345-6789".into()),
      affiliation: "The Open Data Institute".into(),
    }],
  }]);

  let deposit = Deposit::new(
    &config,
    BatchId::generate(&config.batch_prefix, generated_at()),
    generated_at(),
    reports,
  );
  let dir = tempdir()?;
  let files = deposit.write_to(dir.path())?;
  assert!(files.xml.ends_with("ODI_Deposit_202403051407.xml"));
  assert!(files.audit.ends_with("ODI_Deposit_202403051407_audit.csv"));

  let xml = std::fs::read_to_string(&files.xml)?;
  let position = |needle: &str| xml.find(needle).unwrap_or_else(|| panic!("missing {needle}"));
  assert!(xml.contains(r#"<person_name sequence="first" contributor_role="author">"#));
  assert!(position("<contributors>") < position("<titles>"));
  assert!(position("<titles>") < position("<publication_date"));
  assert!(position("<publication_date") < position("<doi_data>"));
  assert!(position("</affiliations>") < position("<ORCID>"));
  assert!(xml.contains("<month>03</month>"));
  assert!(xml.contains("<day>05</day>"));
  assert!(xml.contains("<year>2024</year>"));
  assert!(xml.contains("<ORCID>https://orcid.org/0000-0001-2345-6789</ORCID>"));
  assert!(xml.contains("<doi>10.61557/TEST0001</doi>"));
  assert!(xml.contains(&format!("<resource>{report_url}</resource>")));

  let audit = std::fs::read_to_string(&files.audit)?;
  assert_eq!(audit, "DOI,Title,Authors\n10.61557/TEST0001,Example Report,['Doe']\n");
  Ok(())
}
