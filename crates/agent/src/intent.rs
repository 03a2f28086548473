//! Intent Matching
//!
//! Classifies user text against a fixed, ordered list of regular-expression
//! rules and picks a canned reply. The list is a priority order: the first
//! matching rule wins and later rules are never consulted, so a message
//! like "calculate my savings" resolves to the calculator intent even
//! though the generic cost rule would also match it.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// What a matched rule was about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Calculator,
    Scheduling,
    Contact,
    Greeting,
    Benefits,
    Cost,
    HowItWorks,
    Environment,
    Thanks,
    Farewell,
    Financing,
    Installation,
    /// No rule matched; the reply steers back to solar topics
    Redirect,
}

/// Deferred action the caller should perform after rendering the reply
///
/// The engine never opens UI surfaces itself; it hands the tag back and the
/// embedder decides how and when to act (see `timing::FOLLOW_UP_DELAY_MS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUp {
    /// Present the savings calculator
    OpenCalculator,
    /// Open the external contact form
    OpenContactForm,
}

/// One pattern rule in the priority list
struct IntentRule {
    kind: IntentKind,
    pattern: Regex,
    responses: &'static [&'static str],
    follow_up: Option<FollowUp>,
}

/// Result of classifying one user message
#[derive(Debug, Clone)]
pub struct Classification {
    pub kind: IntentKind,
    pub response: &'static str,
    pub follow_up: Option<FollowUp>,
}

const CALCULATOR_RESPONSES: &[&str] = &[
    "Great! Let me pull up the solar savings calculator for you. Just fill in your details and I'll calculate your potential savings, payback period, and 25-year benefits! 🧮",
];

const SCHEDULING_RESPONSES: &[&str] = &[
    "Excellent! I'd be happy to help you schedule a consultation. Let me open our contact form where you can share your availability and preferences. Our solar experts typically respond within 24 hours!",
];

const CONTACT_RESPONSES: &[&str] = &[
    "Perfect! I've opened our contact form in a new tab. Please fill it out and our solar experts will reach out to you within 24 hours. Is there anything else I can help you with?",
];

const GREETING_RESPONSES: &[&str] = &[
    "Hello! Great to meet you! I'm SolarBot, your AI solar assistant. I can help you calculate savings, answer questions, and connect you with our expert team. What would you like to know about solar energy?",
    "Hey there! Thanks for chatting with me! I'm here to help you explore solar options. I can run calculations, explain benefits, or schedule a consultation. What interests you most?",
    "Hi! Welcome! I'm excited to help you discover solar energy. Whether you want to calculate potential savings, learn about costs, or speak with an expert, I'm here to help. What can I do for you today?",
];

const BENEFITS_RESPONSES: &[&str] = &[
    "Solar panels offer incredible benefits! Financially, most homeowners save $20,000-$75,000 over 25 years, with systems paying for themselves in 6-10 years. Your home value increases by 3-4%, and you'll enjoy energy independence. Environmentally, you're directly fighting climate change - a typical system offsets 3-4 tons of CO2 annually! Plus, with current 30% federal tax credits, there's never been a better time. Want to use our calculator to see your specific savings?",
    "Great question! The advantages are substantial: dramatically reduced electricity bills, protection from rising energy costs, increased property value, and real environmental impact. Most systems pay for themselves in 6-10 years through savings. With incentives and financing options available, going solar is more accessible than ever! Want to calculate your potential savings?",
    "There are so many reasons to go solar! You'll save thousands over the system's 25+ year lifespan, lock in low energy costs, boost your home's value, and help fight climate change. Plus, solar technology is proven and reliable. With 30% tax credits available, it's a smart financial decision! Want to see the numbers for your home?",
];

const COST_RESPONSES: &[&str] = &[
    "Great question! A typical residential system runs $15,000-$25,000 before incentives. The federal tax credit immediately reduces that by 30%, and many states offer additional rebates. Most homeowners pay $10,500-$17,500 effectively. You can finance with $0 down, and monthly payments are often less than your electric bill. The system pays for itself in 6-10 years! Want to use our calculator for exact numbers?",
    "Solar costs have dropped dramatically! The average system costs around $18,000 before incentives. With the 30% federal tax credit, that's about $12,600. Financing options make solar accessible with $0 down. You're trading your utility payment for a solar payment that leads to ownership. After 6-10 years, you have free electricity! Want to calculate your specific costs?",
    "Investing in solar is more affordable than ever! While systems cost $15,000-$25,000 upfront, the 30% federal tax credit plus state incentives can cut that significantly. Most people finance, paying less monthly than their old electric bill. Over 25-30 years, you'll save $40,000-$100,000! Try our calculator to see your savings!",
];

const HOW_IT_WORKS_RESPONSES: &[&str] = &[
    "Solar panels use photovoltaic cells made of silicon that absorb sunlight. When photons hit these cells, they knock electrons loose, creating DC electrical current. An inverter converts this to AC power for your home. On sunny days, excess power flows back to the grid, earning you credits! Even on cloudy days, modern panels generate 15-20% of peak power. It's completely automated!",
];

const ENVIRONMENT_RESPONSES: &[&str] = &[
    "The environmental impact is phenomenal! Every year, a typical system prevents 3-4 tons of CO2 emissions - equivalent to planting 100 trees annually. Over 25 years, that's 100+ tons of CO2 offset! Solar produces zero air pollution, uses no water, and directly combats climate change. You're reducing demand for fossil fuels and helping create a cleaner planet!",
];

const THANKS_RESPONSES: &[&str] = &[
    "You're very welcome! I'm always happy to help people discover solar benefits. Is there anything else you'd like to know, or would you like to use our calculator or speak with our team?",
];

const FAREWELL_RESPONSES: &[&str] = &[
    "Thanks for chatting! I hope I've helped you understand why solar is such a smart investment. Feel free to return anytime with questions. Have a sunny day! ☀️",
];

const FINANCING_RESPONSES: &[&str] = &[
    "Financing solar is easier than ever! Most providers offer $0 down with monthly payments often lower than your current electric bill. Options include solar loans (own the system, get tax credits), solar leases (no upfront cost, fixed monthly rate), and power purchase agreements (pay only for energy produced). Many homeowners qualify instantly, and the 30% federal tax credit can be applied to reduce your loan amount. Want to use our calculator to see estimated monthly payments?",
];

const INSTALLATION_RESPONSES: &[&str] = &[
    "Most roofs are perfect for solar! Ideal conditions include south-facing with minimal shade, but east and west-facing roofs work great too. Installation typically takes 1-3 days after permits are approved. The entire process from consultation to activation averages 2-3 months. Modern mounting systems don't damage your roof - they're designed to protect it! Solar panels can even extend your roof's life by shielding it from weather. Want to schedule a free roof assessment?",
];

const REDIRECT_RESPONSES: &[&str] = &[
    "That's interesting! While my expertise is solar energy, I'm happy to chat. Since you're here, have you considered using our calculator to see potential savings? I can also answer questions or connect you with our expert team!",
    "Good question! I specialize in solar energy, but I can try to help. Speaking of which, would you like to learn about solar benefits? Try our calculator or ask me anything!",
    "Thanks for asking! While solar energy is my specialty, I'm here for friendly conversation too. Would you like to calculate potential savings, schedule a consultation, or explore what solar could do for you?",
];

/// Rule list in priority order. Patterns match against lower-cased text.
static RULES: Lazy<Vec<IntentRule>> = Lazy::new(|| {
    vec![
        IntentRule {
            kind: IntentKind::Calculator,
            pattern: Regex::new(r"calculat|savings|estimate|how much.*save").unwrap(),
            responses: CALCULATOR_RESPONSES,
            follow_up: Some(FollowUp::OpenCalculator),
        },
        IntentRule {
            kind: IntentKind::Scheduling,
            pattern: Regex::new(r"schedule|appointment|consult|book|meet|visit").unwrap(),
            responses: SCHEDULING_RESPONSES,
            follow_up: Some(FollowUp::OpenContactForm),
        },
        IntentRule {
            kind: IntentKind::Contact,
            pattern: Regex::new(r"contact|call|email|reach|speak|talk.*someone").unwrap(),
            responses: CONTACT_RESPONSES,
            follow_up: Some(FollowUp::OpenContactForm),
        },
        IntentRule {
            kind: IntentKind::Greeting,
            pattern: Regex::new(
                r"(^|\s)(hi|hello|hey|greetings|good morning|good afternoon|good evening)($|\s|!)",
            )
            .unwrap(),
            responses: GREETING_RESPONSES,
            follow_up: None,
        },
        IntentRule {
            kind: IntentKind::Benefits,
            pattern: Regex::new(r"why|benefit|advantage|should i|worth it|good idea|pros").unwrap(),
            responses: BENEFITS_RESPONSES,
            follow_up: None,
        },
        IntentRule {
            kind: IntentKind::Cost,
            pattern: Regex::new(r"cost|price|expensive|afford|pay|money|dollar|investment|financing")
                .unwrap(),
            responses: COST_RESPONSES,
            follow_up: None,
        },
        IntentRule {
            kind: IntentKind::HowItWorks,
            pattern: Regex::new(r"how.*work|technology|science|function|panel.*work").unwrap(),
            responses: HOW_IT_WORKS_RESPONSES,
            follow_up: None,
        },
        IntentRule {
            kind: IntentKind::Environment,
            pattern: Regex::new(
                r"environment|climate|carbon|green|clean|planet|eco|sustainable|pollution",
            )
            .unwrap(),
            responses: ENVIRONMENT_RESPONSES,
            follow_up: None,
        },
        IntentRule {
            kind: IntentKind::Thanks,
            pattern: Regex::new(r"thank|thanks|appreciate").unwrap(),
            responses: THANKS_RESPONSES,
            follow_up: None,
        },
        IntentRule {
            kind: IntentKind::Farewell,
            pattern: Regex::new(r"bye|goodbye|see you|gotta go|later").unwrap(),
            responses: FAREWELL_RESPONSES,
            follow_up: None,
        },
        IntentRule {
            kind: IntentKind::Financing,
            pattern: Regex::new(r"financing|loan|payment plan|monthly payment").unwrap(),
            responses: FINANCING_RESPONSES,
            follow_up: None,
        },
        IntentRule {
            kind: IntentKind::Installation,
            pattern: Regex::new(r"roof|installation|install").unwrap(),
            responses: INSTALLATION_RESPONSES,
            follow_up: None,
        },
    ]
});

/// Ordered-rule intent matcher
#[derive(Debug, Default)]
pub struct IntentMatcher;

impl IntentMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Classify user text and pick a reply.
    ///
    /// Matching is case-insensitive. Rules with multiple candidate replies
    /// pick one uniformly through the injected rng; unmatched text (empty
    /// input included) draws from the redirect set with no follow-up.
    pub fn classify<R: Rng>(&self, text: &str, rng: &mut R) -> Classification {
        let msg = text.to_lowercase();

        for rule in RULES.iter() {
            if rule.pattern.is_match(&msg) {
                tracing::debug!(kind = ?rule.kind, "matched intent rule");
                return Classification {
                    kind: rule.kind,
                    response: pick(rule.responses, rng),
                    follow_up: rule.follow_up,
                };
            }
        }

        tracing::debug!("no intent rule matched, redirecting");
        Classification {
            kind: IntentKind::Redirect,
            response: pick(REDIRECT_RESPONSES, rng),
            follow_up: None,
        }
    }
}

/// Uniform pick from a non-empty candidate set
fn pick<R: Rng>(candidates: &'static [&'static str], rng: &mut R) -> &'static str {
    candidates[rng.gen_range(0..candidates.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_calculator_intent_wins() {
        let matcher = IntentMatcher::new();
        let mut rng = seeded();

        for text in [
            "How much can I save?",
            "calculate my savings",
            "give me an estimate",
        ] {
            let result = matcher.classify(text, &mut rng);
            assert_eq!(result.kind, IntentKind::Calculator, "input: {text}");
            assert_eq!(result.follow_up, Some(FollowUp::OpenCalculator));
            assert_eq!(result.response, CALCULATOR_RESPONSES[0]);
        }
    }

    #[test]
    fn test_scheduling_and_contact_open_the_form() {
        let matcher = IntentMatcher::new();
        let mut rng = seeded();

        let result = matcher.classify("I'd like to book a visit", &mut rng);
        assert_eq!(result.kind, IntentKind::Scheduling);
        assert_eq!(result.follow_up, Some(FollowUp::OpenContactForm));

        let result = matcher.classify("can I speak to someone", &mut rng);
        assert_eq!(result.kind, IntentKind::Contact);
        assert_eq!(result.follow_up, Some(FollowUp::OpenContactForm));
    }

    #[test]
    fn test_first_match_precedence() {
        let matcher = IntentMatcher::new();
        let mut rng = seeded();

        // "savings" outranks the cost rule even with cost words present
        let result = matcher.classify("what does a savings estimate cost", &mut rng);
        assert_eq!(result.kind, IntentKind::Calculator);

        // "financing" is claimed by the cost rule before the financing rule
        let result = matcher.classify("financing", &mut rng);
        assert_eq!(result.kind, IntentKind::Cost);

        // "loan" is the financing rule's own keyword
        let result = matcher.classify("loan", &mut rng);
        assert_eq!(result.kind, IntentKind::Financing);
        assert_eq!(result.response, FINANCING_RESPONSES[0]);
    }

    #[test]
    fn test_greeting_needs_word_boundary() {
        let matcher = IntentMatcher::new();
        let mut rng = seeded();

        assert_eq!(matcher.classify("hi", &mut rng).kind, IntentKind::Greeting);
        assert_eq!(
            matcher.classify("Hello there!", &mut rng).kind,
            IntentKind::Greeting
        );
        // "hi" inside a word does not greet
        assert_eq!(
            matcher.classify("this is high", &mut rng).kind,
            IntentKind::Redirect
        );
    }

    #[test]
    fn test_empty_input_redirects() {
        let matcher = IntentMatcher::new();
        let mut rng = seeded();

        let result = matcher.classify("", &mut rng);
        assert_eq!(result.kind, IntentKind::Redirect);
        assert_eq!(result.follow_up, None);
        assert!(REDIRECT_RESPONSES.contains(&result.response));
    }

    #[test]
    fn test_single_response_rules_are_exact() {
        let matcher = IntentMatcher::new();
        let mut rng = seeded();

        let result = matcher.classify("thanks a lot", &mut rng);
        assert_eq!(result.kind, IntentKind::Thanks);
        assert_eq!(result.response, THANKS_RESPONSES[0]);

        let result = matcher.classify("goodbye", &mut rng);
        assert_eq!(result.kind, IntentKind::Farewell);
        assert_eq!(result.response, FAREWELL_RESPONSES[0]);

        let result = matcher.classify("how do panels work", &mut rng);
        assert_eq!(result.kind, IntentKind::HowItWorks);

        let result = matcher.classify("is it good for the planet", &mut rng);
        assert_eq!(result.kind, IntentKind::Environment);

        let result = matcher.classify("what about my roof", &mut rng);
        assert_eq!(result.kind, IntentKind::Installation);
    }

    #[test]
    fn test_candidate_set_is_closed() {
        let matcher = IntentMatcher::new();
        let mut rng = seeded();

        for _ in 0..20 {
            let result = matcher.classify("hello", &mut rng);
            assert!(GREETING_RESPONSES.contains(&result.response));
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let matcher = IntentMatcher::new();

        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let a = matcher.classify("hi there", &mut first);
            let b = matcher.classify("hi there", &mut second);
            assert_eq!(a.response, b.response);
        }
    }
}
