//! Every extraction and classification table the engine runs, compiled once.
//!
//! Number capture deliberately stays at the loose `\d+\.?\d*` semantics of
//! the upstream alert format; locale-formatted numbers ("1,234.56") capture
//! only their leading digits.

use crate::domain::decoder::rules::{compile_all, RuleSet};
use crate::domain::values::action_type::ActionType;
use crate::domain::values::alert_type::AlertType;
use crate::domain::values::confidence::ConfidenceLevel;
use crate::domain::values::risk::Risk;
use crate::domain::values::timeframe::Timeframe;
use crate::domain::values::urgency::Urgency;
use once_cell::sync::Lazy;
use regex::Regex;

pub static TICKER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)(?:ticker|symbol|stock)\s*[:\-]?\s*\$?([A-Za-z]{1,5})\b",
        r"\$([A-Za-z]{1,5})\b",
        // Loose fallback: any short all-caps token. Known to false-positive
        // on words like USD or ETF when no explicit ticker form is present.
        r"(?:^|[^\w$])([A-Z]{1,5})(?:[^\w]|$)",
    ])
});

pub static PRICE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)(?:current\s+price|currently\s+at|trading\s+at|price)\s*[:\-]?\s*\$?(\d+\.?\d*)",
        r"(?i)\bnow\s+at\s+\$?(\d+\.?\d*)",
    ])
});

pub static ENTRY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)(?:entry(?:\s+zone)?|buy\s+(?:zone|area|between|around|at))\s*[:\-]?\s*\$?(\d+\.?\d*(?:\s*[-–]\s*\$?\d+\.?\d*)?)",
    ])
});

pub static TARGET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)(?:price\s+target|target|\bpt\b|\btp\b)\s*[:\-]?\s*\$?(\d+\.?\d*)",
    ])
});

pub static STOP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)(?:stop[\s\-]?loss|\bsl\b|\bstop\b)\s*(?:at|is)?\s*[:\-]?\s*\$?(\d+\.?\d*)",
    ])
});

pub static SUPPORT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\bsupport\s*(?:at|is|near|around|level)?\s*[:\-]?\s*\$?(\d+\.?\d*)",
    ])
});

pub static RESISTANCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\bresistance\s*(?:at|is|near|around|level)?\s*[:\-]?\s*\$?(\d+\.?\d*)",
    ])
});

pub static FLOAT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\bfloat\s*(?:of|is|:)?\s*(?:only\s*)?(\d+\.?\d*\s*(?:[mkb]|million|thousand|billion)?)\b",
    ])
});

pub static FLOAT_RULES: Lazy<RuleSet<&'static str>> = Lazy::new(|| {
    RuleSet::compile(&[
        (r"(?i)low\s+float", "Low Float"),
        (r"(?i)high\s+float", "High Float"),
    ])
});

pub static TIMEFRAME_RULES: Lazy<RuleSet<Timeframe>> = Lazy::new(|| {
    RuleSet::compile(&[
        (
            r"(?i)\b(?:intraday|day\s*trade|scalp(?:ing)?|today)\b",
            Timeframe::Intraday,
        ),
        (r"(?i)\bswing\b", Timeframe::SwingTrade),
        (
            r"(?i)\b(?:long[\s\-]?term|invest(?:ing|ment)?|leaps?)\b",
            Timeframe::LongTerm,
        ),
        (
            r"(?i)\b(?:short[\s\-]?term|quick\s+(?:trade|play|flip))\b",
            Timeframe::ShortTerm,
        ),
    ])
});

pub static ACTION_RULES: Lazy<RuleSet<ActionType>> = Lazy::new(|| {
    RuleSet::compile(&[
        (
            r"(?i)\b(?:buy(?:ing)?|long|accumulat(?:e|ing)|enter(?:ing)?|add(?:ing)?\s+(?:here|shares|more))\b",
            ActionType::BuyLong,
        ),
        (
            r"(?i)\b(?:sell(?:ing)?|exit(?:ing)?|take\s+profits?|trim(?:ming)?|clos(?:e|ing)\s+(?:out|position))\b",
            ActionType::SellExit,
        ),
        (
            r"(?i)\b(?:short(?:ing)?|puts?)\b|bearish\s+(?:play|position)",
            ActionType::ShortBearish,
        ),
        (
            r"(?i)\b(?:watch(?:ing)?|monitor(?:ing)?|keep\s+an\s+eye|on\s+(?:the\s+)?radar)\b",
            ActionType::WatchMonitor,
        ),
    ])
});

pub static ALERT_RULES: Lazy<RuleSet<AlertType>> = Lazy::new(|| {
    RuleSet::compile(&[
        (r"(?i)🚨|⚠|\balert\b|\bwarning\b", AlertType::AlertWarning),
        (r"(?i)\bupdated?\b", AlertType::Update),
        (r"(?i)\bwatch\s?list\b", AlertType::Watchlist),
        (r"(?i)\bbreak(?:ing)?\s*out\b", AlertType::Breakout),
        (
            r"(?i)\bteaser\b|\bcoming\s+soon\b|\bstay\s+tuned\b",
            AlertType::Teaser,
        ),
    ])
});

pub static SETUP_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile_all(&[r"(?i)\bsetup\s*(?:type)?\s*[:\-]\s*([^.!?\r\n]+)"]));

pub static SETUP_RULES: Lazy<RuleSet<&'static str>> = Lazy::new(|| {
    RuleSet::compile(&[
        (r"(?i)\bbreak(?:ing)?\s*out\b", "Breakout Setup"),
        (r"(?i)\b(?:bull\s+)?flag\b", "Bull Flag"),
        (r"(?i)\breversal\b", "Reversal Setup"),
        (r"(?i)\b(?:dip|pullback)\b", "Dip Buy"),
        (r"(?i)\bgap\s+(?:up|down|play|fill)\b", "Gap Play"),
        (r"(?i)\bmomentum\b", "Momentum Play"),
        (r"(?i)\bsqueeze\b", "Short Squeeze"),
    ])
});

pub static URGENCY_RULES: Lazy<RuleSet<Urgency>> = Lazy::new(|| {
    RuleSet::compile(&[
        (
            r"(?i)🚨|\b(?:now|asap|immediately|urgent(?:ly)?|right\s+away)\b",
            Urgency::High,
        ),
        (
            r"(?i)\b(?:soon|today|tomorrow|this\s+week|be\s+ready)\b|watch\s+(?:\w+\s+){0,2}closely",
            Urgency::Medium,
        ),
    ])
});

pub static CONFIDENCE_RULES: Lazy<RuleSet<ConfidenceLevel>> = Lazy::new(|| {
    RuleSet::compile(&[
        (
            r"(?i)high\s+conviction|very\s+confident|strong\s+buy|sure\s+thing|guaranteed|no[\s\-]?brainer",
            ConfidenceLevel::High,
        ),
        (
            r"(?i)\b(?:confident|conviction|likely|solid)\b|good\s+(?:chance|setup)",
            ConfidenceLevel::Medium,
        ),
        (
            r"(?i)\b(?:risky|gamble|lotto|yolo|speculative)\b|not\s+sure",
            ConfidenceLevel::Low,
        ),
    ])
});

pub static RISK_RULES: Lazy<RuleSet<Risk>> = Lazy::new(|| {
    RuleSet::compile(&[
        (r"(?i)high\s+risk|very\s+risky|extremely\s+risky", Risk::High),
        (r"(?i)low\s+risk|safe\s+(?:play|bet)|conservative", Risk::Low),
        (r"(?i)moderate\s+risk|medium\s+risk", Risk::Moderate),
    ])
});

pub static BULLISH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\bbull(?:ish)?\b",
        r"(?i)\b(?:moon(?:ing)?|rocket|runner)\b",
        r"🚀",
        r"(?i)\bbreak(?:ing)?\s*out\b",
        r"(?i)\bupside\b",
        r"(?i)\bcalls?\b",
        r"(?i)\blong\b",
        r"(?i)\bstrong\b",
        r"(?i)\bhigher\b",
    ])
});

pub static BEARISH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\bbear(?:ish)?\b",
        r"(?i)\b(?:dump(?:ing)?|crash(?:ing)?|tank(?:ing)?)\b",
        r"(?i)\bdownside\b",
        r"(?i)\bputs?\b",
        r"(?i)\bshort\b",
        r"(?i)\bweak(?:ness)?\b",
        r"(?i)\bbreak(?:ing)?\s*down\b",
        r"(?i)\blower\b",
    ])
});

pub static CATALYST_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:catalyst|earnings|fda|pdufa|news|press\s+release|pr|announc(?:e|ed|ement|ing)|approval|merger|acquisition|buyout|contract|partnership|launch|guidance|upgrade|downgrade|trial|phase\s+\d)\b",
    )
    .expect("invalid catalyst pattern")
});
