#[cfg(test)]
mod tests {
    use crate::numeric::{parse_or_zero, sq_ft_or_one};
    use crate::settings::EngineSettings;
    use crate::types::{
        CostInputMethod, CostLineItem, PhaseStatus, UnitCostConfig, UnitTypeCatalog, UnitTypeSpec,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn config_with_prices(quantity: u32, base: Decimal, individual: Vec<Decimal>) -> UnitCostConfig {
        UnitCostConfig {
            unit_type_id: Uuid::new_v4(),
            quantity,
            hard_costs: CostLineItem::zero(),
            soft_costs: CostLineItem::zero(),
            land_costs: CostLineItem::zero(),
            contingency_costs: CostLineItem::zero(),
            sales_costs: CostLineItem::zero(),
            lawyer_fees: CostLineItem::zero(),
            construction_financing: CostLineItem::zero(),
            use_construction_financing: false,
            sales_price: base,
            individual_prices: individual,
        }
    }

    // ============================================================================
    // Wire Tag Tests
    // ============================================================================

    #[test]
    fn test_cost_input_method_wire_tags() {
        assert_eq!(
            serde_json::to_string(&CostInputMethod::PerUnit).unwrap(),
            "\"perUnit\""
        );
        assert_eq!(
            serde_json::to_string(&CostInputMethod::PerSqFt).unwrap(),
            "\"perSqFt\""
        );
        assert_eq!(
            serde_json::to_string(&CostInputMethod::Percentage).unwrap(),
            "\"percentage\""
        );
    }

    #[test]
    fn test_cost_input_method_parses_stored_tags() {
        let method: CostInputMethod = serde_json::from_str("\"perSqFt\"").unwrap();
        assert_eq!(method, CostInputMethod::PerSqFt);
    }

    #[test]
    fn test_phase_status_wire_tags() {
        assert_eq!(
            serde_json::to_string(&PhaseStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&PhaseStatus::Completed).unwrap(),
            "\"completed\""
        );
    }

    // ============================================================================
    // Individual Price Resolution Tests
    // ============================================================================

    #[test]
    fn test_price_for_uses_individual_price() {
        let config = config_with_prices(2, dec!(200000), vec![dec!(210000), dec!(190000)]);
        assert_eq!(config.price_for(0), dec!(210000));
        assert_eq!(config.price_for(1), dec!(190000));
    }

    #[test]
    fn test_price_for_pads_short_list_with_base_price() {
        let config = config_with_prices(3, dec!(200000), vec![dec!(210000)]);
        assert_eq!(config.price_for(0), dec!(210000));
        assert_eq!(config.price_for(1), dec!(200000));
        assert_eq!(config.price_for(2), dec!(200000));
    }

    #[test]
    fn test_price_for_treats_unset_entry_as_base_price() {
        let config = config_with_prices(2, dec!(200000), vec![Decimal::ZERO, dec!(250000)]);
        assert_eq!(config.price_for(0), dec!(200000));
        assert_eq!(config.price_for(1), dec!(250000));
    }

    #[test]
    fn test_resolved_prices_never_indexes_out_of_bounds() {
        let config = config_with_prices(4, dec!(100000), vec![dec!(110000)]);
        let prices = config.resolved_prices();
        assert_eq!(prices.len(), 4);
        assert_eq!(prices[3], dec!(100000));
    }

    #[test]
    fn test_resolved_prices_empty_for_zero_quantity() {
        let config = config_with_prices(0, dec!(100000), vec![]);
        assert!(config.resolved_prices().is_empty());
    }

    // ============================================================================
    // Numeric Helper Tests
    // ============================================================================

    #[test]
    fn test_parse_or_zero_valid_number() {
        assert_eq!(parse_or_zero("125000.50"), dec!(125000.50));
        assert_eq!(parse_or_zero("  42 "), dec!(42));
    }

    #[test]
    fn test_parse_or_zero_garbage_degrades_to_zero() {
        assert_eq!(parse_or_zero(""), Decimal::ZERO);
        assert_eq!(parse_or_zero("abc"), Decimal::ZERO);
        assert_eq!(parse_or_zero("$100"), Decimal::ZERO);
    }

    #[test]
    fn test_sq_ft_or_one_guards_zero() {
        assert_eq!(sq_ft_or_one(Decimal::ZERO), Decimal::ONE);
        assert_eq!(sq_ft_or_one(dec!(1200)), dec!(1200));
    }

    // ============================================================================
    // Catalog Tests
    // ============================================================================

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = UnitTypeCatalog::new();
        let id = Uuid::new_v4();
        catalog.insert(id, UnitTypeSpec::new(1500));

        assert_eq!(catalog.get(id), Some(&UnitTypeSpec::new(1500)));
        assert_eq!(catalog.get(Uuid::new_v4()), None);
        assert_eq!(catalog.len(), 1);
    }

    // ============================================================================
    // Settings Tests
    // ============================================================================

    #[test]
    fn test_settings_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.commission.tier1_rate, 5.0);
        assert_eq!(settings.commission.tier2_rate, 3.0);
        assert_eq!(settings.commission.breakpoint, 100_000.0);
        assert_eq!(settings.sensitivity.step_value, 10.0);
        assert_eq!(settings.sensitivity.scenario_count, 5);
    }

    #[test]
    fn test_settings_load_without_environment() {
        let settings = EngineSettings::load().unwrap();
        assert_eq!(settings, EngineSettings::default());
    }
}
