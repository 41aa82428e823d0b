//! Password strength estimation

/// Qualitative strength bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strength {
    #[default]
    None,
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

/// Result of [`calculate_password_strength`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordStrength {
    pub strength: Strength,
    /// 0-100
    pub score: u8,
    /// Comma-joined hints for the missing categories
    pub feedback: String,
}

pub fn calculate_password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::default();
    }

    let len = password.chars().count();
    let mut score: u8 = 0;
    let mut hints: Vec<&str> = Vec::new();

    if len >= 8 {
        score += 20;
    } else {
        hints.push("at least 8 characters");
    }
    if len >= 12 {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 20;
    } else {
        hints.push("lowercase letter");
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 20;
    } else {
        hints.push("uppercase letter");
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 20;
    } else {
        hints.push("number");
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 10;
    } else {
        hints.push("special character");
    }

    let strength = match score {
        0..=49 => Strength::Weak,
        50..=79 => Strength::Medium,
        _ => Strength::Strong,
    };

    let feedback = if hints.is_empty() {
        String::new()
    } else {
        hints.join(", ")
    };

    PasswordStrength {
        strength,
        score,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_is_none() {
        assert_eq!(
            calculate_password_strength(""),
            PasswordStrength {
                strength: Strength::None,
                score: 0,
                feedback: String::new(),
            }
        );
    }

    #[test]
    fn test_ten_chars_all_categories_is_strong() {
        let result = calculate_password_strength("Abcdefgh1!");
        assert_eq!(result.score, 90);
        assert_eq!(result.strength, Strength::Strong);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn test_long_password_gets_bonus() {
        let result = calculate_password_strength("Abcdefghijk1!");
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_short_lowercase_is_weak() {
        let result = calculate_password_strength("abc");
        assert_eq!(result.score, 20);
        assert_eq!(result.strength, Strength::Weak);
        assert_eq!(
            result.feedback,
            "at least 8 characters, uppercase letter, number, special character"
        );
    }

    #[test]
    fn test_medium_bucket() {
        // length 20 + lower 20 + upper 20 = 60
        let result = calculate_password_strength("Abcdefgh");
        assert_eq!(result.score, 60);
        assert_eq!(result.strength, Strength::Medium);
    }

    #[test]
    fn test_boundary_eighty_is_strong() {
        // length 20 + lower 20 + upper 20 + digit 20 = 80
        let result = calculate_password_strength("Abcdefg1");
        assert_eq!(result.score, 80);
        assert_eq!(result.strength, Strength::Strong);
        assert_eq!(result.feedback, "special character");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Strength::Weak.label(), "Weak");
        assert_eq!(Strength::None.label(), "");
    }
}
