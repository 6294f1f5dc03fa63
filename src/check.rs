use reqwest::Method;
use serde_json::Value;

#[derive(Debug)]
pub struct Check {
    pub check_no: u32,
    pub title: String,
    pub method: Method,
    pub url: String,
    pub json_body: Option<Value>,
    pub print_text: bool,
}
