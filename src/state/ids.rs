//! Client-generated identifiers for new records

use chrono::{DateTime, Utc};
use rand::Rng;

/// Asset tag for new equipment: `EQ-` plus four digits
pub fn generate_equipment_id() -> String {
    let n: u32 = rand::thread_rng().gen_range(1000..=9999);
    format!("EQ-{n:04}")
}

/// Employee code for new user accounts: `EMP<unix millis><0-999>`
pub fn generate_employee_code(now: DateTime<Utc>) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1000);
    format!("EMP{}{}", now.timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_equipment_id_shape() {
        for _ in 0..50 {
            let id = generate_equipment_id();
            assert_eq!(id.len(), 7);
            assert!(id.starts_with("EQ-"));
            assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_employee_code_embeds_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let code = generate_employee_code(now);
        assert!(code.starts_with("EMP1704067200000"));
        assert!(code[3..].chars().all(|c| c.is_ascii_digit()));
    }
}
