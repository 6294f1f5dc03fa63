use crate::check::Check;
use crate::errors::ProbeError;
use log::debug;

pub struct ExecutionContext {
    pub client: reqwest::blocking::Client,
}

impl ExecutionContext {
    pub fn new() -> Result<ExecutionContext, ProbeError> {
        let client = reqwest::blocking::Client::builder().build()?;
        return Ok(ExecutionContext { client });
    }
}

// What one executed check leaves behind: the attempted URL, the status code
// and the raw body. Thrown away once written to the transcript.
#[derive(Debug)]
pub struct Capture {
    pub url: String,
    pub status_code: u16,
    pub body: Vec<u8>,
}

impl Capture {
    pub fn text(&self) -> String {
        return String::from_utf8_lossy(&self.body).into_owned();
    }
}

impl Check {
    pub fn name(&self) -> String {
        return format!("#{} {}", self.check_no, self.title);
    }

    pub fn uri(&self) -> Result<reqwest::Url, ProbeError> {
        return self
            .url
            .parse::<reqwest::Url>()
            .map_err(|e| ProbeError::new(&format!("{:?} @ '{}'", e, self.url)));
    }
}

// Any client-side failure (refused connection, timeout, bad URL) becomes a
// ProbeError for the caller to record. A non-2xx status is not a failure.
pub fn execute_check(check: &Check, context: &ExecutionContext) -> Result<Capture, ProbeError> {
    debug!("{}: {} {}", check.name(), check.method, check.url);

    let mut req = context.client.request(check.method.clone(), check.uri()?);
    if let Some(body) = &check.json_body {
        req = req.json(body);
    }

    let res = req.send()?;
    let status_code = res.status().as_u16();
    let body = res.bytes()?.to_vec();

    return Ok(Capture {
        url: check.url.clone(),
        status_code,
        body,
    });
}
