#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        TrackerError,
        app::Portfolio,
        formats::generic::GenericCsv,
        error::Result,
        models::{PortfolioTotal, Position, PriceSeries},
        services::{PriceSource, RateProvider},
    };

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 12, d).unwrap()
    }

    #[derive(Default)]
    struct StaticPrices {
        series: HashMap<String, PriceSeries>,
        requests: Mutex<Vec<(String, NaiveDate, NaiveDate)>>,
    }

    impl StaticPrices {
        fn with(mut self, code: &str, prices: &[(u32, Decimal)]) -> Self {
            let series = PriceSeries::from_prices(code, prices.iter().map(|(d, p)| (date(*d), *p)));
            self.series.insert(code.to_string(), series);
            self
        }
    }

    #[async_trait]
    impl PriceSource for StaticPrices {
        async fn fetch_series(
            &self,
            code: &str,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<PriceSeries> {
            self.requests
                .lock()
                .unwrap()
                .push((code.to_string(), start, end));
            self.series
                .get(code)
                .cloned()
                .ok_or_else(|| TrackerError::data_unavailable(code, "not listed"))
        }
    }

    struct FixedRate(Option<Decimal>);

    #[async_trait]
    impl RateProvider for FixedRate {
        async fn rate(&self, from: &str, to: &str) -> Result<Decimal> {
            if from == to {
                return Ok(Decimal::ONE);
            }
            self.0.ok_or_else(|| TrackerError::ConversionUnavailable {
                from: from.to_string(),
                to: to.to_string(),
                reason: "offline".to_string(),
            })
        }
    }

    fn portfolio() -> Portfolio {
        Portfolio::new(vec![
            Position::new("AFT".into(), "Ak".into(), date(1), dec!(1000), dec!(100)),
            Position::new("TCD".into(), "Tacirler".into(), date(20), dec!(10), dec!(45)),
        ])
    }

    fn prices() -> StaticPrices {
        StaticPrices::default()
            .with(
                "AFT",
                &[(15, dec!(0.10)), (21, dec!(0.12)), (22, dec!(0.13))],
            )
            .with("TCD", &[(20, dec!(4.5)), (21, dec!(4.4)), (22, dec!(4.6))])
    }

    #[tokio::test]
    async fn report_sums_every_position() {
        let report = portfolio()
            .report(&prices(), &FixedRate(None), "TRY", date(22), 14)
            .await
            .unwrap();

        assert_eq!(report.currency(), "TRY");
        assert_eq!(report.profits().len(), 2);

        let aft = &report.profits()[0];
        assert_eq!(*aft.total_worth(), dec!(130));
        assert_eq!(*aft.pl_today(), dec!(10));
        assert_eq!(*aft.pl_week(), dec!(30));
        assert_eq!(*aft.pl_all_time(), dec!(30));

        let tcd = &report.profits()[1];
        assert_eq!(*tcd.total_worth(), dec!(46));
        assert_eq!(*tcd.pl_today(), dec!(2));
        // Bought two days ago: the week window starts at the first known price.
        assert_eq!(*tcd.pl_week(), dec!(1));
        assert_eq!(*tcd.pl_all_time(), dec!(1));

        let worth: Decimal = report.profits().iter().map(|p| *p.total_worth()).sum();
        assert_eq!(*report.total().total_worth(), worth);
        assert_eq!(
            *report.total(),
            PortfolioTotal::new(dec!(176), dec!(12), dec!(31), dec!(31))
        );
    }

    #[tokio::test]
    async fn fetch_window_starts_at_purchase_or_lookback() {
        let prices = prices();
        portfolio()
            .report(&prices, &FixedRate(None), "TRY", date(22), 14)
            .await
            .unwrap();

        let requests = prices.requests.lock().unwrap();
        assert_eq!(
            *requests,
            vec![
                ("AFT".to_string(), date(8), date(22)),
                ("TCD".to_string(), date(20), date(22)),
            ]
        );
    }

    #[tokio::test]
    async fn conversion_uses_one_rate_for_the_whole_report() {
        let rate = dec!(0.075);
        let base = portfolio()
            .report(&prices(), &FixedRate(Some(rate)), "TRY", date(22), 14)
            .await
            .unwrap();
        let converted = portfolio()
            .report(&prices(), &FixedRate(Some(rate)), "USD", date(22), 14)
            .await
            .unwrap();

        assert_eq!(converted.currency(), "USD");
        assert_eq!(*converted.total(), base.total().converted(rate));
        for (converted, base) in converted.profits().iter().zip(base.profits()) {
            assert_eq!(*converted, base.converted(rate));
        }
    }

    #[tokio::test]
    async fn missing_rate_is_conversion_unavailable() {
        let result = portfolio()
            .report(&prices(), &FixedRate(None), "USD", date(22), 14)
            .await;

        assert!(matches!(
            result,
            Err(TrackerError::ConversionUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn unlisted_fund_is_data_unavailable() {
        let prices = StaticPrices::default().with("AFT", &[(22, dec!(0.13))]);

        let result = portfolio()
            .report(&prices, &FixedRate(None), "TRY", date(22), 14)
            .await;

        assert!(matches!(
            result,
            Err(TrackerError::DataUnavailable { ref code, .. }) if code == "TCD"
        ));
    }

    #[tokio::test]
    async fn lookback_past_the_calendar_is_a_config_error() {
        let result = portfolio()
            .report(&prices(), &FixedRate(None), "TRY", date(22), u64::MAX)
            .await;

        assert!(matches!(result, Err(TrackerError::Config(_))));
    }

    #[tokio::test]
    async fn past_report_ignores_later_transactions() {
        let raw = "\
date,kind,code,title,shares,price
2021-12-01,buy,AFT,Ak,10,1
2022-06-01,buy,AFT,Ak,1000,5
2022-06-02,sell,AFT,Ak,10,6
";
        let portfolio = Portfolio::from_export(raw, &GenericCsv, date(22)).unwrap();

        assert_eq!(portfolio.positions().len(), 1);
        assert_eq!(*portfolio.positions()[0].quantity(), dec!(10));
        assert_eq!(*portfolio.positions()[0].total_cost(), dec!(10));

        let prices = StaticPrices::default().with("AFT", &[(21, dec!(1)), (22, dec!(1))]);
        let report = portfolio
            .report(&prices, &FixedRate(None), "TRY", date(22), 14)
            .await
            .unwrap();

        assert_eq!(*report.profits()[0].total_worth(), dec!(10));
        assert_eq!(*report.profits()[0].pl_all_time(), dec!(0));
    }
}
