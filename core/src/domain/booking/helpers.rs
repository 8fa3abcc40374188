use crate::domain::booking::{
    entities::{BookingStatus, ChefBookingRequest, ChefStats},
    pricing::net_payout,
};

/// Dashboard figures for one chef's bookings under a commission percentage.
pub fn compute_chef_stats(bookings: &[ChefBookingRequest], commission_percent: i64) -> ChefStats {
    let completed: Vec<&ChefBookingRequest> = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .collect();
    let total_revenue: i64 = completed.iter().map(|b| b.total_payout).sum();

    ChefStats {
        total_revenue,
        pending_orders: bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Pending)
            .count(),
        completed_orders: completed.len(),
        payout_estimate: net_payout(total_revenue, commission_percent),
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::booking::entities::ChefBookingConfig;

    fn booking(total: i64, status: BookingStatus) -> ChefBookingRequest {
        let mut b = ChefBookingRequest::new(ChefBookingConfig {
            user_id: Uuid::new_v4(),
            chef_id: Uuid::new_v4(),
            client_name: "Client".to_string(),
            client_email: None,
            chef_name: None,
            event_type: None,
            date: "2026-11-01".to_string(),
            time: None,
            hours: 4,
            guests: 2,
            meal_types: vec![],
            location: None,
            total_payout: total,
            commission: None,
        });
        b.status = status;
        b
    }

    #[test]
    fn only_completed_bookings_count_as_revenue() {
        let bookings = vec![
            booking(10000, BookingStatus::Completed),
            booking(7200, BookingStatus::Completed),
            booking(5000, BookingStatus::Pending),
            booking(9000, BookingStatus::Cancelled),
        ];

        let stats = compute_chef_stats(&bookings, 10);

        assert_eq!(stats.total_revenue, 17200);
        assert_eq!(stats.pending_orders, 1);
        assert_eq!(stats.completed_orders, 2);
        assert_eq!(stats.payout_estimate, 15480);
    }

    #[test]
    fn no_bookings_means_zeroes() {
        assert_eq!(
            compute_chef_stats(&[], 10),
            ChefStats {
                total_revenue: 0,
                pending_orders: 0,
                completed_orders: 0,
                payout_estimate: 0,
            }
        );
    }
}
