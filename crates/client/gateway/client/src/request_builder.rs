use std::{borrow::Cow, collections::HashMap};

use bytes::Buf;
use http::Method;
use http_body_util::BodyExt;
use hyper::body::Incoming;
use hyper::header::CONTENT_TYPE;
use hyper::{HeaderMap, Request, Response, StatusCode, Uri};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sg_gateway::error::{SequencerError, StarknetError};
use sg_gateway::BlockId;
use tower::ServiceExt;
use url::Url;

use super::builder::TimeoutClient;

#[derive(Debug)]
pub struct RequestBuilder<'a> {
    client: &'a TimeoutClient,
    url: Url,
    params: HashMap<Cow<'static, str>, String>,
    headers: HeaderMap,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(client: &'a TimeoutClient, base_url: Url, headers: HeaderMap) -> Self {
        Self { client, url: base_url, params: HashMap::new(), headers }
    }

    pub fn add_uri_segment(mut self, segment: &str) -> Result<Self, url::ParseError> {
        self.url = self.url.join(segment)?;
        Ok(self)
    }

    pub fn add_param(mut self, name: Cow<'static, str>, value: &str) -> Self {
        self.params.insert(name, value.to_string());
        self
    }

    pub fn with_block_id(self, block_id: Option<&BlockId>) -> Self {
        match block_id {
            Some(block_id) => {
                let (name, value) = block_id.to_query_param();
                self.add_param(Cow::from(name), &value)
            }
            None => self,
        }
    }

    pub async fn send_post<T, D>(self, body: &D) -> Result<T, SequencerError>
    where
        T: DeserializeOwned,
        D: Serialize + ?Sized,
    {
        let uri = self.build_uri()?;

        let mut req_builder = Request::builder().method(Method::POST).uri(uri.clone());

        if let Some(headers) = req_builder.headers_mut() {
            headers.extend(self.headers);
        }

        let body = serde_json::to_string(body).map_err(SequencerError::SerializeRequest)?;

        tracing::debug!(%uri, body_len = body.len(), "Sending gateway request");
        let req = req_builder.header(CONTENT_TYPE, "application/json").body(body)?;

        let response = self.client.clone().oneshot(req).await.map_err(SequencerError::HttpCallError)?;
        unpack(response).await
    }

    fn build_uri(&self) -> Result<Uri, SequencerError> {
        let mut url = self.url.clone();
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.params.iter().map(|(key, value)| (key.as_ref(), value.as_str())));
        }

        let uri: Uri = url.as_str().try_into().map_err(|_| SequencerError::InvalidUrl(url))?;
        Ok(uri)
    }
}

async fn unpack<T>(response: Response<Incoming>) -> Result<T, SequencerError>
where
    T: ::serde::de::DeserializeOwned,
{
    let http_status = response.status();
    tracing::trace!(%http_status, "Received gateway response");
    let whole_body = response.collect().await?.aggregate();

    if http_status == StatusCode::TOO_MANY_REQUESTS {
        return Err(SequencerError::StarknetError(StarknetError::rate_limited()));
    } else if !http_status.is_success() {
        let starknet_error = serde_json::from_reader::<_, StarknetError>(whole_body.reader())
            .map_err(|serde_error| SequencerError::InvalidStarknetError { http_status, serde_error })?;

        return Err(starknet_error.into());
    }

    let res = serde_json::from_reader(whole_body.reader())
        .map_err(|serde_error| SequencerError::DeserializeBody { serde_error })?;

    Ok(res)
}
