use anyhow::{Context, Result};
use reqwest::Client;

use super::{
    frank_dto::FrankForexDto,
    utils::{make_request, parse_response_object},
};

pub async fn get_latest_rate(
    from_currency: &str,
    to_currency: &str,
    base_url: &str,
    client: &Client,
) -> Result<FrankForexDto> {
    let params = [("from", from_currency), ("to", to_currency)];
    let res = make_request(client, base_url, "latest", &params)
        .await
        .with_context(|| format!("Frankfurter ({} -> {})", from_currency, to_currency))?;
    parse_response_object::<FrankForexDto>(
        res,
        &format!(
            "No latest exchange rate from {} to {}",
            from_currency, to_currency
        ),
    )
}
