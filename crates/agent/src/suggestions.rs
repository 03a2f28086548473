//! Quick-Reply Suggestions
//!
//! Context-sensitive suggestion chips derived from the last assistant
//! reply. Pure keyword lookup into fixed tables; no learning or ranking.

/// What tapping a suggestion chip should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionAction {
    /// Send this canned text as a user message
    Send(&'static str),
    /// Present the savings calculator
    OpenCalculator,
    /// Open the external contact form
    OpenContactForm,
}

/// A single suggestion chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickReply {
    /// Label shown on the chip
    pub label: &'static str,
    /// Action performed when tapped
    pub action: SuggestionAction,
}

/// Shown after replies about cost or affordability
const COST_CONTEXT: [QuickReply; 4] = [
    QuickReply {
        label: "💳 Financing options",
        action: SuggestionAction::Send("How can I afford solar panels?"),
    },
    QuickReply {
        label: "🧮 Calculate savings",
        action: SuggestionAction::OpenCalculator,
    },
    QuickReply {
        label: "⏱️ Payback period",
        action: SuggestionAction::Send("How long until solar pays for itself?"),
    },
    QuickReply {
        label: "📧 Contact us",
        action: SuggestionAction::OpenContactForm,
    },
];

/// Shown after replies about scheduling a consultation
const SCHEDULING_CONTEXT: [QuickReply; 4] = [
    QuickReply {
        label: "📧 Fill contact form",
        action: SuggestionAction::OpenContactForm,
    },
    QuickReply {
        label: "💬 More questions",
        action: SuggestionAction::Send("I have more questions first"),
    },
    QuickReply {
        label: "💰 Costs",
        action: SuggestionAction::Send("How much do solar panels cost?"),
    },
    QuickReply {
        label: "🧮 Calculator",
        action: SuggestionAction::OpenCalculator,
    },
];

/// Shown after replies that mention the calculator or savings
const CALCULATOR_CONTEXT: [QuickReply; 4] = [
    QuickReply {
        label: "📅 Book appointment",
        action: SuggestionAction::Send("Schedule a consultation"),
    },
    QuickReply {
        label: "💡 Why solar?",
        action: SuggestionAction::Send("Why should I get solar panels?"),
    },
    QuickReply {
        label: "💰 Financing",
        action: SuggestionAction::Send("What financing options are available?"),
    },
    QuickReply {
        label: "📧 Contact",
        action: SuggestionAction::OpenContactForm,
    },
];

/// Fallback set for everything else
const DEFAULT_CONTEXT: [QuickReply; 4] = [
    QuickReply {
        label: "💡 Why solar?",
        action: SuggestionAction::Send("Why should I get solar panels?"),
    },
    QuickReply {
        label: "💰 Costs",
        action: SuggestionAction::Send("How much do solar panels cost?"),
    },
    QuickReply {
        label: "📅 Book appointment",
        action: SuggestionAction::Send("Schedule a consultation"),
    },
    QuickReply {
        label: "🧮 Calculate savings",
        action: SuggestionAction::OpenCalculator,
    },
];

/// Pick the suggestion set for the given assistant reply.
///
/// The four keyword groups are mutually exclusive and checked in priority
/// order (cost, scheduling, calculator, default); always returns exactly
/// four chips.
pub fn suggestions_for(last_reply: &str) -> &'static [QuickReply] {
    let context = last_reply.to_lowercase();

    if context.contains("cost") || context.contains("price") || context.contains("afford") {
        &COST_CONTEXT
    } else if context.contains("schedule")
        || context.contains("appointment")
        || context.contains("consult")
    {
        &SCHEDULING_CONTEXT
    } else if context.contains("calculator") || context.contains("savings") {
        &CALCULATOR_CONTEXT
    } else {
        &DEFAULT_CONTEXT
    }
}

/// Suggestion set shown before any reply exists
pub fn default_suggestions() -> &'static [QuickReply] {
    &DEFAULT_CONTEXT
}
