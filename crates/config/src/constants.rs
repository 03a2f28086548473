//! Centralized constants for the SolarBot engine
//!
//! This module provides a single source of truth for all business constants
//! and default values used across the workspace. Instead of hardcoding values
//! in multiple files, use these constants to ensure consistency.

/// Solar system pricing and incentive math
pub mod pricing {
    /// Installed cost per kilowatt of capacity (USD)
    pub const COST_PER_KW: f64 = 3000.0;

    /// Federal investment tax credit, as a fraction of system cost
    pub const FEDERAL_TAX_CREDIT_RATE: f64 = 0.30;

    /// Derate factor applied to nameplate production estimates
    pub const PRODUCTION_EFFICIENCY: f64 = 0.75;

    /// Financing term behind the monthly payment figure (15-year loan)
    pub const LOAN_TERM_MONTHS: f64 = 180.0;

    /// System lifetime used for the long-horizon savings figure
    pub const LIFETIME_YEARS: f64 = 25.0;
}

/// State incentive rates, as a fraction of system cost
pub mod incentives {
    /// California (high incentives)
    pub const CALIFORNIA: f64 = 0.10;

    /// Texas (medium incentives)
    pub const TEXAS: f64 = 0.08;

    /// Florida (standard incentives)
    pub const FLORIDA: f64 = 0.05;

    /// All other states
    pub const OTHER_STATES: f64 = 0.03;
}

/// Reply pacing (in milliseconds)
pub mod timing {
    /// Base simulated typing delay before a reply (ms)
    pub const REPLY_DELAY_MS: u64 = 1000;

    /// Upper bound of random jitter added to the reply delay (ms)
    pub const REPLY_JITTER_MS: u64 = 500;

    /// Recommended delay before the caller acts on a reply's follow-up (ms)
    pub const FOLLOW_UP_DELAY_MS: u64 = 500;

    /// Recommended delay before the contact-form acknowledgment renders (ms)
    pub const CONTACT_ACK_DELAY_MS: u64 = 300;
}

/// External links
pub mod links {
    /// Contact form for consultations and callbacks
    pub const CONTACT_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSf0bvHj2dJ3mAQo_FX-cdfG4md5pvnybIXOLCs67uYlFbIy7Q/viewform";
}

/// Brand strings
pub mod brand {
    /// Assistant display name
    pub const BOT_NAME: &str = "SolarBot";

    /// Tagline used in exported transcripts
    pub const TAGLINE: &str = "Your Solar Energy Assistant";

    /// Welcome message seeded into the transcript after a confirmed clear
    pub const WELCOME_MESSAGE: &str = "Hello! I'm SolarBot, your AI-powered solar energy assistant! 🌟 I can help you understand solar panels, calculate potential savings, schedule appointments, and answer all your renewable energy questions. How can I help you today?";

    /// Acknowledgment reply appended when the contact form is opened
    pub const CONTACT_FORM_ACK: &str = "I've opened our contact form in a new tab! Please fill it out and our solar experts will reach out to you within 24 hours. Feel free to ask me any other questions!";
}

/// Savings calculator form defaults
pub mod defaults {
    /// Default monthly electric bill (USD)
    pub const MONTHLY_BILL: f64 = 150.0;

    /// Default average sunlight hours per day
    pub const SUN_HOURS: f64 = 5.0;

    /// Default state incentive rate (the Texas tier)
    pub const STATE_INCENTIVE_RATE: f64 = super::incentives::TEXAS;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incentive_rates_ordering() {
        // California is the richest tier, other states the leanest
        assert!(incentives::CALIFORNIA > incentives::TEXAS);
        assert!(incentives::TEXAS > incentives::FLORIDA);
        assert!(incentives::FLORIDA > incentives::OTHER_STATES);
    }

    #[test]
    fn test_rates_are_fractions() {
        assert!(pricing::FEDERAL_TAX_CREDIT_RATE > 0.0 && pricing::FEDERAL_TAX_CREDIT_RATE < 1.0);
        assert!(incentives::CALIFORNIA < 1.0);
        assert!(incentives::OTHER_STATES > 0.0);
        assert!(pricing::PRODUCTION_EFFICIENCY > 0.0 && pricing::PRODUCTION_EFFICIENCY <= 1.0);
    }

    #[test]
    fn test_timing_sane() {
        assert!(timing::REPLY_JITTER_MS <= timing::REPLY_DELAY_MS);
        assert!(timing::CONTACT_ACK_DELAY_MS <= timing::FOLLOW_UP_DELAY_MS);
    }

    #[test]
    fn test_default_rate_is_a_known_tier() {
        assert_eq!(defaults::STATE_INCENTIVE_RATE, incentives::TEXAS);
    }

    #[test]
    fn test_brand_strings() {
        assert!(brand::WELCOME_MESSAGE.contains(brand::BOT_NAME));
        assert!(links::CONTACT_FORM_URL.starts_with("https://"));
    }
}
