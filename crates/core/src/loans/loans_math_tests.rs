//! Tests for EMI, amortization, and pre-payment math.

#[cfg(test)]
mod tests {
    use crate::loans::{
        amortization_schedule, monthly_emi, simulate_prepayment, PrepaymentInput,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_emi_standard_case() {
        // 100k at 12% over 12 months: the textbook value is 8884.88.
        let emi = monthly_emi(dec!(100000), dec!(12), 12).unwrap();
        assert_eq!(emi, dec!(8884.88));
    }

    #[test]
    fn test_emi_zero_rate() {
        let emi = monthly_emi(dec!(12000), dec!(0), 12).unwrap();
        assert_eq!(emi, dec!(1000));
    }

    #[test]
    fn test_emi_rejects_bad_terms() {
        assert!(monthly_emi(dec!(0), dec!(5), 12).is_err());
        assert!(monthly_emi(dec!(-100), dec!(5), 12).is_err());
        assert!(monthly_emi(dec!(1000), dec!(-1), 12).is_err());
        assert!(monthly_emi(dec!(1000), dec!(5), 0).is_err());
    }

    #[test]
    fn test_schedule_ends_at_zero() {
        let rows = amortization_schedule(dec!(100000), dec!(12), 12).unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows.last().unwrap().balance, Decimal::ZERO);

        // Every row's principal + interest equals its payment.
        for row in &rows {
            assert_eq!(row.payment, row.principal + row.interest, "month {}", row.month);
        }

        // Principal components sum back to the original principal.
        let total_principal: Decimal = rows.iter().map(|r| r.principal).sum();
        assert_eq!(total_principal, dec!(100000));
    }

    #[test]
    fn test_schedule_interest_declines() {
        let rows = amortization_schedule(dec!(250000), dec!(6.5), 360).unwrap();
        assert!(rows.len() <= 360);
        assert!(rows[0].interest > rows.last().unwrap().interest);
        assert_eq!(rows.last().unwrap().balance, Decimal::ZERO);
    }

    #[test]
    fn test_schedule_never_exceeds_term() {
        // Long terms accumulate rounding drift; the month-360 installment
        // must settle the residue instead of spilling into a month 361.
        let rows = amortization_schedule(dec!(250000), dec!(6.5), 360).unwrap();
        assert_eq!(rows.len(), 360);
        let last = rows.last().unwrap();
        assert_eq!(last.balance, Decimal::ZERO);
        assert_eq!(last.payment, last.principal + last.interest);
    }

    #[test]
    fn test_prepayment_extra_monthly_saves_interest() {
        let outcome = simulate_prepayment(
            dec!(100000),
            dec!(12),
            12,
            &PrepaymentInput {
                extra_monthly: dec!(1000),
                lump_sum: None,
                lump_sum_month: None,
            },
        )
        .unwrap();

        assert!(outcome.months_saved >= 1);
        assert!(outcome.interest_saved > Decimal::ZERO);
        assert_eq!(
            outcome.scenario.months as usize,
            outcome.schedule.len()
        );
        assert_eq!(outcome.schedule.last().unwrap().balance, Decimal::ZERO);
    }

    #[test]
    fn test_prepayment_lump_sum() {
        let outcome = simulate_prepayment(
            dec!(200000),
            dec!(8),
            120,
            &PrepaymentInput {
                extra_monthly: dec!(0),
                lump_sum: Some(dec!(20000)),
                lump_sum_month: Some(12),
            },
        )
        .unwrap();

        assert!(outcome.months_saved > 0);
        assert!(outcome.interest_saved > Decimal::ZERO);
        // The lump sum shows up in month 12's payment.
        let month12 = outcome.schedule.iter().find(|r| r.month == 12).unwrap();
        assert!(month12.payment > outcome.schedule[0].payment);
    }

    #[test]
    fn test_prepayment_rejects_negative_extra() {
        let input = PrepaymentInput {
            extra_monthly: dec!(-5),
            lump_sum: None,
            lump_sum_month: None,
        };
        assert!(simulate_prepayment(dec!(1000), dec!(5), 12, &input).is_err());
    }
}
