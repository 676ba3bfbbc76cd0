use crate::domain::model::Ticket;
use rand::Rng;

const TICKET_ID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const TICKET_ID_LEN: usize = 10;

/// Draws a 10-character id from A-Z0-9. The generator is injected so runs
/// seeded with the same value produce the same id.
pub fn generate_ticket_id<R: Rng>(rng: &mut R) -> String {
    (0..TICKET_ID_LEN)
        .map(|_| TICKET_ID_CHARS[rng.gen_range(0..TICKET_ID_CHARS.len())] as char)
        .collect()
}

/// The ticket block shown on screen after payment.
pub fn render_console(ticket: &Ticket) -> String {
    let mut lines = Vec::new();
    lines.push("================= BUS E-TICKET =================".to_string());
    lines.push(format!("Ticket ID: {}", ticket.id));
    lines.push(format!(
        "Passenger: {} | Age: {}",
        ticket.passenger.name, ticket.passenger.age
    ));
    lines.push(format!("Contact: {}", ticket.passenger.contact));
    lines.push(format!(
        "From: {} -> To: {}",
        ticket.origin_city, ticket.destination_city
    ));
    lines.push(format!("Distance: {:.2} km", ticket.distance_km));
    lines.push(format!("Fare: ₹{:.2}", ticket.fare));
    lines.push(format!(
        "Payment Method: {} | Status: PAID",
        ticket.payment_method
    ));
    lines.push(format!(
        "Timestamp: {}",
        ticket.issued_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push("================================================".to_string());
    lines.join("\n")
}

/// The plain-text receipt persisted next to the JSON one.
pub fn render_receipt(ticket: &Ticket) -> String {
    format!(
        "TICKET ID: {}\nPassenger: {}\nAge: {}\nContact: {}\nFrom: {}\nTo: {}\n\
         Distance: {:.2} km\nFare: ₹{:.2}\nPayment: {}\nStatus: PAID\nTime: {}\n",
        ticket.id,
        ticket.passenger.name,
        ticket.passenger.age,
        ticket.passenger.contact,
        ticket.origin_city,
        ticket.destination_city,
        ticket.distance_km,
        ticket.fare,
        ticket.payment_method,
        ticket.issued_at.format("%Y-%m-%d %H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Passenger, PaymentMethod};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_ticket(id: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            passenger: Passenger {
                name: "Asha Verma".to_string(),
                age: 34,
                contact: "9876543210".to_string(),
            },
            origin_city: "mumbai".to_string(),
            destination_city: "pune".to_string(),
            distance_km: 120.15,
            fare: 670.75,
            payment_method: PaymentMethod::Card,
            issued_at: chrono::Local::now(),
        }
    }

    #[test]
    fn test_id_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = generate_ticket_id(&mut rng);
        assert_eq!(id.len(), 10);
        assert!(id
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
    }

    #[test]
    fn test_same_seed_same_id() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(generate_ticket_id(&mut a), generate_ticket_id(&mut b));
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        assert_ne!(generate_ticket_id(&mut a), generate_ticket_id(&mut b));
    }

    #[test]
    fn test_console_block_fields() {
        let rendered = render_console(&sample_ticket("AB12CD34EF"));
        assert!(rendered.contains("BUS E-TICKET"));
        assert!(rendered.contains("Ticket ID: AB12CD34EF"));
        assert!(rendered.contains("Passenger: Asha Verma | Age: 34"));
        assert!(rendered.contains("From: mumbai -> To: pune"));
        assert!(rendered.contains("Distance: 120.15 km"));
        assert!(rendered.contains("Fare: ₹670.75"));
        assert!(rendered.contains("Payment Method: Card | Status: PAID"));
    }

    #[test]
    fn test_receipt_fields() {
        let rendered = render_receipt(&sample_ticket("AB12CD34EF"));
        assert!(rendered.contains("TICKET ID: AB12CD34EF"));
        assert!(rendered.contains("Contact: 9876543210"));
        assert!(rendered.contains("Status: PAID"));
    }
}
