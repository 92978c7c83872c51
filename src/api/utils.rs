use anyhow::{Error, Result};
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::trace;

pub async fn make_request<Q>(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &Q,
) -> Result<Value>
where
    Q: Serialize + ?Sized,
{
    let url = format!("{}/{}", base_url.trim_end_matches('/'), endpoint);
    trace!(%url, "GET");
    let res = client.get(&url).query(params).send().await?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)?;

    Ok(data)
}

pub async fn post_form<F>(client: &Client, base_url: &str, endpoint: &str, form: &F) -> Result<Value>
where
    F: Serialize + ?Sized,
{
    let url = format!("{}/{}", base_url.trim_end_matches('/'), endpoint);
    trace!(%url, "POST");
    let res = client.post(&url).form(form).send().await?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let text = res.text().await?;
    serde_json::from_str::<Value>(&text)
        .map_err(|_| Error::msg(format!("Unexpected API response: {}", text)))
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .map_err(|_| Error::msg(error_msg.to_string())),
        _ => Err(Error::msg("Unexpected API response format: not an object")),
    }
}
