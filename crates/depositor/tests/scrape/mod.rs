use super::*;

const REPORT_URL: &str = "https://theodi.org/insights/reports/example-report/";
const JANE_PROFILE: &str = "https://theodi.org/people/jane-doe/";

mod profiles {
  use super::*;

  #[traced_test]
  #[tokio::test]
  async fn test_fetch_orcid() {
    let fetcher = StaticFetcher::new().with_page(
      JANE_PROFILE,
      200,
      &profile_page(Some("https://orcid.org/0000-0001-2345-6789")),
    );
    let scraper = scraper(fetcher);

    assert_eq!(
      scraper.fetch_orcid(JANE_PROFILE).await.as_deref(),
      Some("https://orcid.org/0000-0001-2345-6789")
    );
  }

  #[traced_test]
  #[tokio::test]
  async fn test_fetch_orcid_absent_cases() {
    let fetcher = StaticFetcher::new()
      .with_page("https://theodi.org/people/no-block/", 200, &profile_page(None))
      .with_page("https://theodi.org/people/bad-link/", 200, &profile_page(Some("https://orcid.org/")))
      .with_page(
        "https://theodi.org/people/gone/",
        404,
        &profile_page(Some("https://orcid.org/0000-0001-2345-6789")),
      );
    let scraper = scraper(fetcher);

    for url in [
      "https://theodi.org/people/no-block/",
      "https://theodi.org/people/bad-link/",
      "https://theodi.org/people/gone/",
      "https://theodi.org/people/unreachable/",
    ] {
      assert_eq!(scraper.fetch_orcid(url).await, None, "expected no ORCID from {url}");
    }
  }

  #[tokio::test]
  async fn test_try_fetch_orcid_surfaces_transport_errors() {
    let scraper = scraper(StaticFetcher::new().with_page(JANE_PROFILE, 500, ""));

    assert!(scraper.try_fetch_orcid("https://theodi.org/people/unreachable/").await.is_err());
    assert_eq!(scraper.try_fetch_orcid(JANE_PROFILE).await.unwrap(), None);
  }

  #[tokio::test]
  async fn test_throttle_before_each_profile() -> TestResult<()> {
    let body = report_page(Some("Throttled"), None, &[
      r#"<a href="/people/one/">Ann One</a>"#,
      r#"<a href="/people/two/">Bo Two</a>"#,
    ]);
    let fetcher = StaticFetcher::new()
      .with_page(REPORT_URL, 200, &body)
      .with_page("https://theodi.org/people/one/", 200, &profile_page(None))
      .with_page("https://theodi.org/people/two/", 200, &profile_page(None));
    let scraper = Scraper::new(fetcher, Site::default()).with_throttle(Duration::from_millis(40));

    let started = Instant::now();
    scraper.try_fetch_report(REPORT_URL, "10.61557/TEST0001").await?;
    assert!(started.elapsed() >= Duration::from_millis(80));
    Ok(())
  }
}

mod reports {
  use super::*;

  #[traced_test]
  #[tokio::test]
  async fn test_fetch_report() -> TestResult<()> {
    let body = report_page(Some("Example Report"), Some("2024-03-05"), &[
      r#"<a href="/people/jane-doe/">Jane Doe</a>"#,
      "Prince",
      r#"<a href="https://www.linkedin.com/in/sam-lee">Sam Lee</a>"#,
    ]);
    let fetcher = StaticFetcher::new().with_page(REPORT_URL, 200, &body).with_page(
      JANE_PROFILE,
      200,
      &profile_page(Some("https://orcid.org/0000-0001-2345-6789")),
    );
    let scraper = scraper(fetcher);

    let report = scraper.try_fetch_report(REPORT_URL, "10.61557/TEST0001").await?;

    assert_eq!(report.doi, "10.61557/TEST0001");
    assert_eq!(report.url, REPORT_URL);
    assert_eq!(report.title, "Example Report");
    assert_eq!(report.publication_date, NaiveDate::from_ymd_opt(2024, 3, 5));
    assert_eq!(report.authors, vec![
      AuthorRecord {
        given_name:  "Jane".into(),
        family_name: "Doe".into(),
        orcid:       Some("https://orcid.org/0000-0001-2345-6789".into()),
        affiliation: "The Open Data Institute".into(),
      },
      AuthorRecord {
        given_name:  "".into(),
        family_name: "Prince".into(),
        orcid:       None,
        affiliation: "The Open Data Institute".into(),
      },
      AuthorRecord {
        given_name:  "Sam".into(),
        family_name: "Lee".into(),
        orcid:       None,
        affiliation: "The Open Data Institute".into(),
      },
    ]);

    // Off-site profiles are never requested
    assert_eq!(scraper_requests(&scraper), [REPORT_URL, JANE_PROFILE]);
    Ok(())
  }

  #[tokio::test]
  async fn test_failed_profile_keeps_report() -> TestResult<()> {
    let body = report_page(Some("Example Report"), None, &[
      r#"<a href="/people/unreachable/">Jane Doe</a>"#,
    ]);
    let scraper = scraper(StaticFetcher::new().with_page(REPORT_URL, 200, &body));

    let report = scraper.try_fetch_report(REPORT_URL, "10.61557/TEST0001").await?;
    assert_eq!(report.authors.len(), 1);
    assert_eq!(report.authors[0].family_name, "Doe");
    assert_eq!(report.authors[0].orcid, None);
    Ok(())
  }

  #[tokio::test]
  async fn test_degraded_page() -> TestResult<()> {
    let body = report_page(None, Some("5 March 2024"), &[]);
    let scraper = scraper(StaticFetcher::new().with_page(REPORT_URL, 200, &body));

    let report = scraper.try_fetch_report(REPORT_URL, "10.61557/TEST0001").await?;
    assert_eq!(report.title, UNKNOWN_TITLE);
    assert_eq!(report.publication_date, None);
    assert!(report.authors.is_empty());
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_not_found_report_is_dropped() {
    let scraper = scraper(StaticFetcher::new().with_page(REPORT_URL, 404, "<h1>Not found</h1>"));

    assert_eq!(scraper.fetch_report(REPORT_URL, "10.61557/TEST0001").await, None);
    let err = scraper.try_fetch_report(REPORT_URL, "10.61557/TEST0001").await.unwrap_err();
    assert!(matches!(err, DepositorError::HttpStatus { status: 404, .. }));
  }

  #[tokio::test]
  async fn test_unreachable_report_is_dropped() {
    let scraper = scraper(StaticFetcher::new());
    assert_eq!(scraper.fetch_report(REPORT_URL, "10.61557/TEST0001").await, None);
  }

  #[tokio::test]
  async fn test_nameless_author_drops_report() {
    let body = r#"<html><body>
      <h1 class="header__title">Example Report</h1>
      <ul class="authors-list">
        <li><span class="role">Editor</span></li>
        <li><div class="people-list__person-name"><a href="/people/jane-doe/">Jane Doe</a></div></li>
      </ul>
    </body></html>"#;
    let fetcher = StaticFetcher::new().with_page(REPORT_URL, 200, body).with_page(
      JANE_PROFILE,
      200,
      &profile_page(Some("https://orcid.org/0000-0001-2345-6789")),
    );
    let scraper = scraper(fetcher);

    assert_eq!(scraper.fetch_report(REPORT_URL, "10.61557/TEST0001").await, None);
    let err = scraper.try_fetch_report(REPORT_URL, "10.61557/TEST0001").await.unwrap_err();
    assert!(matches!(err, DepositorError::Extraction(_)));
    // The page is rejected before any profile is looked up
    assert!(!scraper_requests(&scraper).iter().any(|url| url == JANE_PROFILE));
  }

  fn scraper_requests(scraper: &Scraper<StaticFetcher>) -> Vec<String> {
    scraper.fetcher().requests()
  }
}
