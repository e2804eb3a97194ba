use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::browser::PageProvider;
use crate::model::{ApiRecord, Target};

mod http_client;
use self::http_client::with_retries;

mod types;
pub use self::types::*;
mod operations;

pub struct RemoteClient {
    target: Target,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(target: Target) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("apictl")
            .build()
            .context("build reqwest client")?;
        Ok(Self { target, client })
    }
}

impl PageProvider for RemoteClient {
    fn fetch_page(&mut self, page: u32, timeout: Duration) -> Result<Vec<ApiRecord>> {
        debug!(page, ?timeout, "fetch api page");
        Ok(self.list_apis(page, Some(timeout))?.records())
    }
}
