//! API definition read/delete operations.

use super::*;

impl RemoteClient {
    /// One page of API definitions. `timeout` bounds the whole request.
    pub fn list_apis(&self, page: u32, timeout: Option<Duration>) -> Result<ApiListResponse> {
        let mut req = self
            .client
            .get(self.url("/api/apis"))
            .query(&[("p", page)])
            .header(reqwest::header::AUTHORIZATION, self.auth());
        if let Some(timeout) = timeout {
            req = req.timeout(timeout);
        }
        let resp = req.send().context("list apis request")?;

        let list: ApiListResponse = self
            .ensure_ok(resp, "list apis")?
            .json()
            .context("parse api list")?;
        debug!(page, count = list.apis.len(), pages = list.pages, "api page received");
        Ok(list)
    }

    /// `list_apis` for one-shot commands: retried, no per-request bound.
    pub fn list_apis_retrying(&self, page: u32) -> Result<ApiListResponse> {
        with_retries("list apis", || self.list_apis(page, None))
    }

    pub fn get_api(&self, api_id: &str) -> Result<serde_json::Value> {
        let resp = self
            .client
            .get(self.url(&format!("/api/apis/{}", api_id)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()
            .context("get api request")?;

        let api: serde_json::Value = self
            .ensure_ok(resp, &format!("api {}", api_id))?
            .json()
            .context("parse api definition")?;
        Ok(api)
    }

    pub fn delete_api(&self, api_id: &str) -> Result<StatusMessage> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/apis/{}", api_id)))
            .header(reqwest::header::AUTHORIZATION, self.auth())
            .send()
            .context("delete api request")?;

        let msg: StatusMessage = self
            .ensure_ok(resp, &format!("api {}", api_id))?
            .json()
            .context("parse delete response")?;
        Ok(msg)
    }
}
