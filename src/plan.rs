use crate::check::Check;
use crate::config::ServiceUrls;
use anyhow::Result;
use reqwest::Method;
use serde::Serialize;

// Fixed test identity used by every check; matches the seeded user.
pub const PROBE_USER_ID: u32 = 123123;
pub const REPORT_YEAR: u32 = 2026;
pub const REPORT_MONTH: u32 = 1;

#[derive(Debug, Serialize)]
pub struct NewCost {
    pub userid: u32,
    pub description: String,
    pub category: String,
    pub sum: u32,
}

pub fn sample_cost() -> NewCost {
    return NewCost {
        userid: PROBE_USER_ID,
        description: "milk 9".to_string(),
        category: "food".to_string(),
        sum: 8,
    };
}

// The built-in sequence: about, report, add, report again. The second report
// always runs so the transcript shows whether the added item is visible.
pub fn service_checks(urls: &ServiceUrls) -> Result<Vec<Check>> {
    let report_url = format!(
        "{}/api/report/?id={}&year={}&month={}",
        urls.costs, PROBE_USER_ID, REPORT_YEAR, REPORT_MONTH
    );

    let checks = vec![
        Check {
            check_no: 1,
            title: "getting the about".to_string(),
            method: Method::GET,
            url: format!("{}/api/about/", urls.admin),
            json_body: None,
            print_text: true,
        },
        Check {
            check_no: 2,
            title: "getting the report - 1".to_string(),
            method: Method::GET,
            url: report_url.clone(),
            json_body: None,
            print_text: true,
        },
        Check {
            check_no: 3,
            title: "adding cost item".to_string(),
            method: Method::POST,
            url: format!("{}/api/add/", urls.costs),
            json_body: Some(serde_json::to_value(sample_cost())?),
            print_text: false,
        },
        Check {
            check_no: 4,
            title: "getting the report - 2".to_string(),
            method: Method::GET,
            url: report_url,
            json_body: None,
            print_text: true,
        },
    ];
    return Ok(checks);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(0, "GET", "/api/about/")]
    #[test_case(1, "GET", "/api/report/?id=123123&year=2026&month=1")]
    #[test_case(2, "POST", "/api/add/")]
    #[test_case(3, "GET", "/api/report/?id=123123&year=2026&month=1")]
    fn checks_keep_the_fixed_order(index: usize, method: &str, path: &str) {
        let checks = service_checks(&ServiceUrls::default()).unwrap();
        assert_eq!(checks.len(), 4);
        assert_eq!(checks[index].method.as_str(), method);
        assert!(checks[index].url.ends_with(path), "{}", checks[index].url);
    }

    #[test]
    fn only_the_about_check_hits_the_admin_service() {
        let urls = ServiceUrls::default();
        let checks = service_checks(&urls).unwrap();
        assert!(checks[0].url.starts_with(&urls.admin));
        for check in &checks[1..] {
            assert!(check.url.starts_with(&urls.costs), "{}", check.url);
        }
    }

    #[test]
    fn both_report_checks_use_identical_urls() {
        let checks = service_checks(&ServiceUrls::default()).unwrap();
        assert_eq!(checks[1].url, checks[3].url);
    }

    #[test]
    fn add_payload_matches_the_wire_format() {
        let checks = service_checks(&ServiceUrls::default()).unwrap();
        let body = checks[2].json_body.as_ref().unwrap();
        assert_eq!(
            body,
            &json!({"userid": 123123, "description": "milk 9", "category": "food", "sum": 8})
        );
    }

    #[test]
    fn only_the_add_check_skips_the_text_line() {
        let checks = service_checks(&ServiceUrls::default()).unwrap();
        let skipped: Vec<u32> = checks
            .iter()
            .filter(|c| !c.print_text)
            .map(|c| c.check_no)
            .collect();
        assert_eq!(skipped, vec![3]);
    }
}
