use crate::infra::seeded_store;
use clap::Args;
use frontdesk::bookings::{BookingStore, GuestId};
use frontdesk::credibility::{
    assess_raw, CredibilityAssessment, RawOutcomeCounts, CASH_ELIGIBILITY_THRESHOLD,
};
use frontdesk::desk::{CredibilityService, ServiceError};
use frontdesk::error::AppError;
use frontdesk::payments::PaymentMethod;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Bookings that reached checkout
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) completed: i64,
    /// Bookings cancelled before check-in
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) cancellations: i64,
    /// Confirmed bookings where the guest never arrived
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) no_shows: i64,
    /// Total bookings on file (defaults to the sum of the outcomes)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) total: Option<i64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Limit the walkthrough to one guest id (e.g. g-002)
    #[arg(long)]
    pub(crate) guest: Option<String>,
    /// Print payment selectors as JSON payloads
    #[arg(long)]
    pub(crate) json: bool,
    /// Method to attempt on open bookings: credit_card, debit_card, or cash (default)
    #[arg(long, value_parser = parse_payment_method)]
    pub(crate) method: Option<PaymentMethod>,
}

fn parse_payment_method(raw: &str) -> Result<PaymentMethod, String> {
    PaymentMethod::from_label(raw).ok_or_else(|| format!("unknown payment method `{raw}`"))
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        completed,
        cancellations,
        no_shows,
        total,
    } = args;

    let raw = RawOutcomeCounts {
        total_bookings: total
            .unwrap_or_else(|| completed.saturating_add(cancellations).saturating_add(no_shows)),
        completed_stays: completed,
        cancellations,
        no_shows,
    };
    let assessment = assess_raw(raw).map_err(ServiceError::from)?;

    println!(
        "Outcomes: {} completed / {} cancelled / {} no-show ({} total)",
        raw.completed_stays, raw.cancellations, raw.no_shows, raw.total_bookings
    );
    render_assessment(&assessment);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { guest, json, method } = args;
    let method = method.unwrap_or(PaymentMethod::Cash);

    let store = Arc::new(seeded_store().map_err(ServiceError::from)?);
    let service = CredibilityService::new(store.clone());

    let guests = match guest {
        Some(id) => vec![GuestId(id)],
        None => store
            .guests()
            .map_err(ServiceError::from)?
            .into_iter()
            .map(|guest| guest.id)
            .collect(),
    };

    println!("Front desk credibility demo");
    for guest_id in guests {
        let assessment = service.assess_guest(&guest_id)?;
        let name = store
            .guest(&guest_id)
            .map_err(ServiceError::from)?
            .map(|guest| guest.name)
            .unwrap_or_else(|| guest_id.0.clone());

        println!("\n{} ({})", name, guest_id);
        render_assessment(&assessment);

        let mut bookings = store
            .bookings_for_guest(&guest_id)
            .map_err(ServiceError::from)?;
        bookings.sort_by_key(|booking| booking.check_in);

        println!("  History:");
        for booking in &bookings {
            let room_type = store
                .room(&booking.room_id)
                .map_err(ServiceError::from)?
                .map_or("unknown room", |room| room.room_type.label());
            println!(
                "    - {} | {} | {} -> {} | {}",
                booking.id, room_type, booking.check_in, booking.check_out, booking.status
            );
        }

        for booking in bookings.iter().filter(|booking| !booking.status.is_terminal()) {
            let view = service.payment_options(&booking.id)?;
            if json {
                match serde_json::to_string_pretty(&view) {
                    Ok(payload) => println!("  Payment selector payload:\n{}", payload),
                    Err(err) => println!("  Payment selector payload unavailable: {}", err),
                }
            } else {
                println!("  Payment options for {}:", booking.id);
                for option in &view.options {
                    let label = option.method.label();
                    match &option.reason {
                        Some(reason) => println!("    - {} (disabled: {})", label, reason),
                        None => println!("    - {}", label),
                    }
                }
            }

            match service.select_payment(&booking.id, method) {
                Ok(view) => println!(
                    "  {} recorded for {} ({} nights, total {:.2})",
                    method.label(),
                    view.booking.id,
                    view.stay.nights,
                    view.stay.total as f64 / 100.0
                ),
                Err(err) => println!("  {} refused for {}: {}", method.label(), booking.id, err),
            }
        }
    }

    Ok(())
}

fn render_assessment(assessment: &CredibilityAssessment) {
    println!(
        "  Credibility: {}% ({}) | turn-up likelihood {}",
        assessment.score, assessment.band_label, assessment.turn_up_likelihood
    );
    if assessment.cash_eligible {
        println!("  Cash payment: available");
    } else {
        println!(
            "  Cash payment: unavailable (requires {}% or higher)",
            CASH_ELIGIBILITY_THRESHOLD
        );
    }
}
