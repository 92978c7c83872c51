use anyhow::{Error, Result};
use chrono::NaiveDate;
use reqwest::Client;

use super::{
    tefas_dto::{TefasHistoryDto, TefasPriceDto},
    utils::{parse_response_object, post_form},
};

const HISTORY_ENDPOINT: &str = "api/DB/BindHistoryInfo";
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Daily unit prices of `code` between `start` and `end`, newest first as TEFAS sends them.
pub async fn get_price_history(
    code: &str,
    start: NaiveDate,
    end: NaiveDate,
    base_url: &str,
    client: &Client,
) -> Result<Vec<TefasPriceDto>> {
    let start = start.format(DATE_FORMAT).to_string();
    let end = end.format(DATE_FORMAT).to_string();
    let form = [
        ("fontip", "YAT"),
        ("sfontur", ""),
        ("fonkod", code),
        ("fongrup", ""),
        ("bastarih", start.as_str()),
        ("bittarih", end.as_str()),
        ("fonturkod", ""),
        ("fonunvantip", ""),
    ];

    let res = post_form(client, base_url, HISTORY_ENDPOINT, &form).await?;
    let history = parse_response_object::<TefasHistoryDto>(
        res,
        &format!("Failed to parse TEFAS history for {}", code),
    )?;

    let data: Vec<TefasPriceDto> = history
        .data()
        .iter()
        .filter(|row| row.code().eq_ignore_ascii_case(code))
        .cloned()
        .collect();
    if data.is_empty() {
        return Err(Error::msg(format!(
            "TEFAS returned no prices for {} between {} and {}",
            code, start, end
        )));
    }

    Ok(data)
}
