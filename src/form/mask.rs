//! Input masks.
//!
//! # Responsibilities
//! - Strip non-digits, cap length, and punctuate CPF, telefone and CEP
//!   values progressively as the user types
//!
//! # Design Decisions
//! - Pure functions over the raw input; the caller writes the result back
//!   into the field on every keystroke
//! - Telefone splits the local part 4-4 up to 8 digits and 5-4 at 9 digits,
//!   so a complete 10-digit number reads `(DD) NNNN-NNNN`

fn digits(raw: &str, max: usize) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

/// Mask a CPF as `000.000.000-00`, inserting separators as digits arrive.
pub fn format_cpf(raw: &str) -> String {
    let mut value = digits(raw, 11);
    if value.len() >= 3 {
        value.insert(3, '.');
    }
    if value.len() >= 7 {
        value.insert(7, '.');
    }
    if value.len() >= 11 {
        value.insert(11, '-');
    }
    value
}

/// Mask a telefone as `(DD) NNNN-NNNN` or `(DD) NNNNN-NNNN` depending on
/// whether the local part has 8 or 9 digits.
pub fn format_telefone(raw: &str) -> String {
    let value = digits(raw, 11);
    if value.is_empty() {
        return String::new();
    }

    let (ddd, local) = value.split_at(value.len().min(2));
    if local.is_empty() {
        return format!("({ddd}");
    }

    let mut out = format!("({ddd}) ");
    let split = if local.len() == 9 { 5 } else { 4 };
    if local.len() <= split {
        out.push_str(local);
    } else {
        out.push_str(&local[..split]);
        out.push('-');
        out.push_str(&local[split..]);
    }
    out
}

/// Mask a CEP as `00000-000`.
pub fn format_cep(raw: &str) -> String {
    let mut value = digits(raw, 8);
    if value.len() >= 5 {
        value.insert(5, '-');
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_complete() {
        assert_eq!(format_cpf("12345678901"), "123.456.789-01");
    }

    #[test]
    fn test_cpf_strips_non_digits_and_truncates() {
        assert_eq!(format_cpf("123.456.789-01"), "123.456.789-01");
        assert_eq!(format_cpf("123456789019999"), "123.456.789-01");
        assert_eq!(format_cpf("abc123def456"), "123.456.");
    }

    #[test]
    fn test_cpf_progressive_prefix_growth() {
        // Each longer input must extend the previous masked value.
        let mut previous = String::new();
        for len in 0..=11 {
            let masked = format_cpf(&"12345678901"[..len]);
            assert!(
                masked.starts_with(&previous),
                "{masked:?} does not extend {previous:?}"
            );
            previous = masked;
        }
        assert_eq!(previous, "123.456.789-01");
    }

    #[test]
    fn test_telefone_nine_digit_local() {
        assert_eq!(format_telefone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn test_telefone_eight_digit_local() {
        assert_eq!(format_telefone("1134567890"), "(11) 3456-7890");
    }

    #[test]
    fn test_telefone_partial_input() {
        assert_eq!(format_telefone(""), "");
        assert_eq!(format_telefone("1"), "(1");
        assert_eq!(format_telefone("11"), "(11");
        assert_eq!(format_telefone("119"), "(11) 9");
        assert_eq!(format_telefone("11987"), "(11) 987");
        assert_eq!(format_telefone("1198765"), "(11) 9876-5");
    }

    #[test]
    fn test_telefone_truncates_at_eleven_digits() {
        assert_eq!(format_telefone("119876543210000"), "(11) 98765-4321");
    }

    #[test]
    fn test_cep_complete() {
        assert_eq!(format_cep("01310100"), "01310-100");
    }

    #[test]
    fn test_cep_partial_and_noisy_input() {
        assert_eq!(format_cep("0131"), "0131");
        assert_eq!(format_cep("01310"), "01310-");
        assert_eq!(format_cep("01310-100"), "01310-100");
        assert_eq!(format_cep("01310100999"), "01310-100");
    }
}
