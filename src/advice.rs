// 💬 Advice - Eco tips and quotes shown after a submission
// Selection rotates by record count so the core stays deterministic

/// Shown after a low-impact purchase
pub const ECO_TIPS: &[&str] = &[
    "Did you know bamboo grows 10x faster than trees and absorbs more CO2?",
    "Buying second-hand reduces a product's carbon footprint by up to 80%.",
    "Washing clothes in cold water saves 90% of the energy used by washing machines.",
    "Every $1 spent on local produce keeps money in your community and cuts transport emissions.",
];

/// Shown after a high-impact purchase
pub const QUOTES: &[&str] = &[
    "\u{201c}The greatest threat to our planet is the belief that someone else will save it.\u{201d} \u{2013} Robert Swan",
    "\u{201c}Buy less, choose well, make it last.\u{201d} \u{2013} Vivienne Westwood",
    "\u{201c}Sustainability is not a goal to be reached but a way of thinking.\u{201d}",
];

/// Tip for the nth logged purchase (1-based count); cycles through the pool
pub fn tip_for(count: usize) -> &'static str {
    ECO_TIPS[count.wrapping_sub(1) % ECO_TIPS.len()]
}

/// Quote for the nth logged purchase (1-based count); cycles through the pool
pub fn quote_for(count: usize) -> &'static str {
    QUOTES[count.wrapping_sub(1) % QUOTES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cycles_through_pool() {
        assert_eq!(tip_for(1), ECO_TIPS[0]);
        assert_eq!(tip_for(4), ECO_TIPS[3]);
        assert_eq!(tip_for(5), ECO_TIPS[0]);

        assert_eq!(quote_for(1), QUOTES[0]);
        assert_eq!(quote_for(3), QUOTES[2]);
        assert_eq!(quote_for(4), QUOTES[0]);
    }

    #[test]
    fn test_same_count_same_advice() {
        assert_eq!(tip_for(7), tip_for(7));
        assert_eq!(quote_for(7), quote_for(7));
    }
}
