//! Recurring cost aggregation
//!
//! Normalizes rent, maintenance and additional services to a monthly figure.
//! The yearly figure is always twelve times the monthly one.

use shared_types::types::present;
use shared_types::{AdditionalService, BillingFrequency, CostBreakdown, CostItem};

const MONTHLY: &str = "Monthly";

/// Aggregate the recurring charges of an agreement.
///
/// Breakdown order is rent, maintenance (only when positive), then services
/// in submission order. Unknown service frequencies bill monthly.
pub fn calculate_total_costs(
    rent: f64,
    maintenance: Option<f64>,
    services: &[AdditionalService],
) -> CostBreakdown {
    let mut monthly_total = rent;
    let mut breakdown = vec![CostItem {
        item: "Rent".to_string(),
        amount: rent,
        frequency: MONTHLY.to_string(),
    }];

    if let Some(maintenance) = maintenance.filter(|amount| *amount > 0.0) {
        monthly_total += maintenance;
        breakdown.push(CostItem {
            item: "Maintenance Charges".to_string(),
            amount: maintenance,
            frequency: MONTHLY.to_string(),
        });
    }

    for service in services {
        let cost = service.cost_or_zero();
        monthly_total += service_frequency(service).monthly_equivalent(cost);
        breakdown.push(CostItem {
            item: present(&service.service_name)
                .unwrap_or("Additional Service")
                .to_string(),
            amount: cost,
            frequency: service.frequency_label().to_string(),
        });
    }

    CostBreakdown {
        monthly_total,
        yearly_total: monthly_total * 12.0,
        breakdown,
    }
}

fn service_frequency(service: &AdditionalService) -> BillingFrequency {
    if let Some(label) = present(&service.billing_frequency) {
        if BillingFrequency::parse(label).is_none() {
            tracing::warn!(
                "Unrecognized billing frequency '{}' for {}, billing monthly",
                label,
                present(&service.service_name).unwrap_or("additional service")
            );
        }
    }
    service.frequency()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn service(name: Option<&str>, cost: Option<f64>, frequency: Option<&str>) -> AdditionalService {
        AdditionalService {
            service_name: name.map(str::to_string),
            cost,
            billing_frequency: frequency.map(str::to_string),
            description: None,
        }
    }

    #[test]
    fn test_rent_only() {
        assert_eq!(
            calculate_total_costs(1000.0, Some(0.0), &[]),
            CostBreakdown {
                monthly_total: 1000.0,
                yearly_total: 12000.0,
                breakdown: vec![CostItem {
                    item: "Rent".to_string(),
                    amount: 1000.0,
                    frequency: "Monthly".to_string(),
                }],
            }
        );
    }

    #[test]
    fn test_maintenance_and_quarterly_service() {
        let costs = calculate_total_costs(
            1000.0,
            Some(200.0),
            &[service(Some("Housekeeping"), Some(300.0), Some("Quarterly"))],
        );

        assert_eq!(costs.monthly_total, 1300.0);
        assert_eq!(costs.yearly_total, 15600.0);
        let items: Vec<_> = costs.breakdown.iter().map(|c| c.item.as_str()).collect();
        assert_eq!(items, vec!["Rent", "Maintenance Charges", "Housekeeping"]);
        assert_eq!(costs.breakdown[2].amount, 300.0);
        assert_eq!(costs.breakdown[2].frequency, "Quarterly");
    }

    #[test]
    fn test_yearly_and_one_time_services() {
        let costs = calculate_total_costs(
            1000.0,
            None,
            &[
                service(Some("Insurance"), Some(1200.0), Some("Yearly")),
                service(Some("Deep Clean"), Some(5000.0), Some("OneTime")),
            ],
        );

        assert_eq!(costs.monthly_total, 1100.0);
        assert_eq!(costs.breakdown.len(), 3);
    }

    #[test]
    fn test_service_defaults() {
        let costs = calculate_total_costs(500.0, None, &[service(None, None, None)]);

        assert_eq!(
            costs.breakdown[1],
            CostItem {
                item: "Additional Service".to_string(),
                amount: 0.0,
                frequency: "Monthly".to_string(),
            }
        );
        assert_eq!(costs.monthly_total, 500.0);
    }

    #[test]
    fn test_unknown_frequency_bills_monthly_and_keeps_label() {
        let costs = calculate_total_costs(
            1000.0,
            None,
            &[service(Some("Gym"), Some(50.0), Some("Fortnightly"))],
        );

        assert_eq!(costs.monthly_total, 1050.0);
        assert_eq!(costs.breakdown[1].frequency, "Fortnightly");
    }

    #[test]
    fn test_negative_maintenance_is_skipped() {
        let costs = calculate_total_costs(1000.0, Some(-50.0), &[]);
        assert_eq!(costs.breakdown.len(), 1);
        assert_eq!(costs.monthly_total, 1000.0);
    }
}
