// Hosted deployments of the four services, without trailing slash.
pub const DEFAULT_LOGS_URL: &str = "https://logs-service-final.onrender.com";
pub const DEFAULT_USERS_URL: &str = "https://users-service-final.onrender.com";
pub const DEFAULT_COSTS_URL: &str = "https://costs-service-final.onrender.com";
pub const DEFAULT_ADMIN_URL: &str = "https://admin-service-final.onrender.com";

#[derive(Debug, Clone)]
pub struct ServiceUrls {
    pub logs: String,
    pub users: String,
    pub costs: String,
    pub admin: String,
}

impl Default for ServiceUrls {
    fn default() -> ServiceUrls {
        return ServiceUrls {
            logs: DEFAULT_LOGS_URL.to_string(),
            users: DEFAULT_USERS_URL.to_string(),
            costs: DEFAULT_COSTS_URL.to_string(),
            admin: DEFAULT_ADMIN_URL.to_string(),
        };
    }
}

impl ServiceUrls {
    // Transcript labels. The logs and users services are listed but no check
    // calls them; d is the admin service.
    pub fn labeled(&self) -> [(&'static str, &str); 4] {
        return [
            ("a", self.logs.as_str()),
            ("b", self.users.as_str()),
            ("c", self.costs.as_str()),
            ("d", self.admin.as_str()),
        ];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "a")]
    #[test_case(1, "b")]
    #[test_case(2, "c")]
    #[test_case(3, "d")]
    fn labels_keep_their_order(index: usize, label: &str) {
        let urls = ServiceUrls::default();
        assert_eq!(urls.labeled()[index].0, label);
    }

    #[test]
    fn label_d_is_the_admin_service() {
        let urls = ServiceUrls::default();
        assert_eq!(urls.labeled()[3].1, urls.admin);
    }

    #[test]
    fn default_urls_have_no_trailing_slash() {
        for (label, url) in ServiceUrls::default().labeled() {
            assert!(!url.ends_with('/'), "{}={} ends with a slash", label, url);
        }
    }
}
