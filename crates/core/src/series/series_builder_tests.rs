// Test cases for SeriesBuilder.
#[cfg(test)]
mod tests {
    use crate::series::series_builder::SeriesBuilder;
    use crate::series::series_errors::SeriesError;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn rate_factors(dates: &[&str], factor: Decimal) -> Vec<(NaiveDate, Decimal)> {
        dates.iter().map(|d| (date(d), factor)).collect()
    }

    #[test]
    fn test_build_aligns_prices_rates_and_inflation() {
        let series = SeriesBuilder::new()
            .with_asset_prices(
                "PETR4",
                vec![(date("2024-01-02"), dec!(38.10)), (date("2024-01-03"), dec!(38.55))],
            )
            .with_daily_rate_factors(rate_factors(&["2024-01-02", "2024-01-03"], dec!(1.0004)))
            .with_monthly_inflation_factor(2024, 1, dec!(1.0042))
            .build()
            .unwrap();

        assert_eq!(series.len(), 2);
        let first = series.first().unwrap();
        assert_eq!(first.date, date("2024-01-02"));
        assert_eq!(first.price("PETR4"), Some(dec!(38.10)));
        assert_eq!(first.daily_rate_factor, dec!(1.0004));
        assert_eq!(first.monthly_inflation_factor, dec!(1.0042));
    }

    #[test]
    fn test_build_forward_fills_rate_gaps() {
        // Rates observed only on the 2nd and the 5th; the 3rd and 4th carry
        // the 2nd's factor, the 5th switches to its own.
        let series = SeriesBuilder::new()
            .with_asset_prices(
                "PETR4",
                vec![
                    (date("2024-01-02"), dec!(38.00)),
                    (date("2024-01-03"), dec!(38.20)),
                    (date("2024-01-04"), dec!(38.40)),
                    (date("2024-01-05"), dec!(38.60)),
                ],
            )
            .with_daily_rate_factors(vec![
                (date("2024-01-02"), dec!(1.0004)),
                (date("2024-01-05"), dec!(1.0005)),
            ])
            .with_monthly_inflation_factor(2024, 1, dec!(1.0042))
            .build()
            .unwrap();

        let factors: Vec<Decimal> = series.iter().map(|r| r.daily_rate_factor).collect();
        assert_eq!(
            factors,
            vec![dec!(1.0004), dec!(1.0004), dec!(1.0004), dec!(1.0005)]
        );
    }

    #[test]
    fn test_build_forward_fills_asset_price_gaps() {
        // VALE3 has no observation on the 3rd; the row keeps the 2nd's price.
        let series = SeriesBuilder::new()
            .with_asset_prices(
                "PETR4",
                vec![
                    (date("2024-01-02"), dec!(38.00)),
                    (date("2024-01-03"), dec!(38.20)),
                ],
            )
            .with_asset_prices("VALE3", vec![(date("2024-01-02"), dec!(61.75))])
            .with_daily_rate_factors(rate_factors(&["2024-01-02", "2024-01-03"], dec!(1.0004)))
            .with_monthly_inflation_factor(2024, 1, dec!(1.0042))
            .build()
            .unwrap();

        assert_eq!(series.len(), 2);
        let second = &series.records()[1];
        assert_eq!(second.price("VALE3"), Some(dec!(61.75)));
        assert_eq!(second.price("PETR4"), Some(dec!(38.20)));
    }

    #[test]
    fn test_build_drops_leading_incomplete_rows() {
        // VALE3 only starts trading on the 4th, so the 2nd and 3rd are
        // dropped and the output starts at the first complete day.
        let series = SeriesBuilder::new()
            .with_asset_prices(
                "PETR4",
                vec![
                    (date("2024-01-02"), dec!(38.00)),
                    (date("2024-01-03"), dec!(38.20)),
                    (date("2024-01-04"), dec!(38.40)),
                ],
            )
            .with_asset_prices("VALE3", vec![(date("2024-01-04"), dec!(61.75))])
            .with_daily_rate_factors(rate_factors(
                &["2024-01-02", "2024-01-03", "2024-01-04"],
                dec!(1.0004),
            ))
            .with_monthly_inflation_factor(2024, 1, dec!(1.0042))
            .build()
            .unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.first().unwrap().date, date("2024-01-04"));
    }

    #[test]
    fn test_build_broadcasts_monthly_inflation_with_previous_month_fallback() {
        // February has no published factor yet; its rows carry January's.
        let series = SeriesBuilder::new()
            .with_asset_prices(
                "PETR4",
                vec![
                    (date("2024-01-30"), dec!(38.00)),
                    (date("2024-01-31"), dec!(38.10)),
                    (date("2024-02-01"), dec!(38.20)),
                ],
            )
            .with_daily_rate_factors(rate_factors(
                &["2024-01-30", "2024-01-31", "2024-02-01"],
                dec!(1.0004),
            ))
            .with_monthly_inflation_factor(2024, 1, dec!(1.0042))
            .build()
            .unwrap();

        let factors: Vec<Decimal> = series.iter().map(|r| r.monthly_inflation_factor).collect();
        assert_eq!(factors, vec![dec!(1.0042), dec!(1.0042), dec!(1.0042)]);
    }

    #[test]
    fn test_build_uses_distinct_factor_per_month_when_published() {
        let series = SeriesBuilder::new()
            .with_asset_prices(
                "PETR4",
                vec![(date("2024-01-31"), dec!(38.00)), (date("2024-02-01"), dec!(38.10))],
            )
            .with_daily_rate_factors(rate_factors(&["2024-01-31", "2024-02-01"], dec!(1.0004)))
            .with_monthly_inflation_factor(2024, 1, dec!(1.0042))
            .with_monthly_inflation_factor(2024, 2, dec!(1.0083))
            .build()
            .unwrap();

        let factors: Vec<Decimal> = series.iter().map(|r| r.monthly_inflation_factor).collect();
        assert_eq!(factors, vec![dec!(1.0042), dec!(1.0083)]);
    }

    #[test]
    fn test_build_without_assets_uses_rate_dates_as_calendar() {
        let series = SeriesBuilder::new()
            .with_daily_rate_factors(rate_factors(
                &["2024-01-02", "2024-01-03", "2024-01-04"],
                dec!(1.0004),
            ))
            .with_monthly_inflation_factor(2024, 1, dec!(1.0042))
            .build()
            .unwrap();

        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|r| r.prices.is_empty()));
    }

    #[test]
    fn test_build_fails_when_nothing_overlaps() {
        // Inflation data starts in February but all price/rate rows are in
        // January, so no row is ever complete.
        let result = SeriesBuilder::new()
            .with_asset_prices("PETR4", vec![(date("2024-01-02"), dec!(38.00))])
            .with_daily_rate_factors(rate_factors(&["2024-01-02"], dec!(1.0004)))
            .with_monthly_inflation_factor(2024, 2, dec!(1.0083))
            .build();

        assert!(matches!(result, Err(SeriesError::NoAlignedRows)));
    }

    #[test]
    fn test_build_empty_builder_fails() {
        assert!(matches!(
            SeriesBuilder::new().build(),
            Err(SeriesError::NoAlignedRows)
        ));
    }
}
