#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::api::{
        frank_dto::FrankForexDto,
        tefas_dto::TefasHistoryDto,
        utils::parse_response_object,
    };

    #[test]
    fn tefas_history_is_deserialized() {
        let body = json!({
            "draw": 0,
            "recordsTotal": 2,
            "recordsFiltered": 2,
            "data": [
                {
                    "TARIH": "1640131200000",
                    "FONKODU": "AFT",
                    "FONUNVAN": "AK PORTFÖY YENİ TEKNOLOJİLER YABANCI HİSSE SENEDİ FONU",
                    "FIYAT": 0.184552,
                    "TEDPAYSAYISI": 1000.0,
                    "KISISAYISI": 10.0,
                    "PORTFOYBUYUKLUK": 100.0,
                    "BORSABULTENFIYAT": "-"
                },
                {
                    "TARIH": "1640044800000",
                    "FONKODU": "AFT",
                    "FONUNVAN": "AK PORTFÖY YENİ TEKNOLOJİLER YABANCI HİSSE SENEDİ FONU",
                    "FIYAT": 0.179,
                    "TEDPAYSAYISI": 1000.0,
                    "KISISAYISI": 10.0,
                    "PORTFOYBUYUKLUK": 100.0,
                    "BORSABULTENFIYAT": "-"
                }
            ]
        });

        let history: TefasHistoryDto = parse_response_object(body, "bad history").unwrap();

        let latest = &history.data()[0];
        assert_eq!(latest.code(), "AFT");
        assert_eq!(*latest.price(), dec!(0.184552));
        assert_eq!(
            latest.trading_date().unwrap(),
            NaiveDate::from_ymd_opt(2021, 12, 22).unwrap()
        );
        assert_eq!(
            history.data()[1].trading_date().unwrap(),
            NaiveDate::from_ymd_opt(2021, 12, 21).unwrap()
        );
    }

    #[test]
    fn frankfurter_rates_are_deserialized() {
        let body = json!({
            "amount": 1.0,
            "base": "TRY",
            "date": "2021-12-22",
            "rates": { "USD": 0.07421 }
        });

        let forex: FrankForexDto = parse_response_object(body, "bad forex").unwrap();

        assert_eq!(forex.base(), "TRY");
        assert_eq!(forex.rates()["USD"], dec!(0.07421));
    }

    #[test]
    fn unexpected_shapes_are_rejected() {
        assert!(parse_response_object::<FrankForexDto>(json!([1, 2]), "bad").is_err());
        assert!(parse_response_object::<FrankForexDto>(json!({"base": 1}), "bad").is_err());
    }
}
