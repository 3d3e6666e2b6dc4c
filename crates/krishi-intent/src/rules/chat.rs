//! Text chat table: canned answers by topic.

use krishi_core::config::ChatReplies;

use crate::error::IntentError;
use crate::intent::Intent;
use crate::router::IntentRouter;

/// Build the chat router from the configured replies.
pub fn chat_router(replies: &ChatReplies) -> Result<IntentRouter, IntentError> {
    let table: [super::Entry<'_>; 6] = [
        (
            "pricing",
            &["price", "cost", "rate", "मूल्य", "भाव", "किंमत"],
            Intent::reply(&replies.pricing),
        ),
        (
            "delivery",
            &["deliver", "ship", "dispatch", "डिलीवरी", "वितरण"],
            Intent::reply(&replies.delivery),
        ),
        (
            "payment",
            &["pay", "payment", "razorpay", "भुगतान", "पेमेंट"],
            Intent::reply(&replies.payment),
        ),
        (
            "selling",
            &["sell", "list", "add product", "बेच", "विक"],
            Intent::reply(&replies.selling),
        ),
        (
            "schemes",
            &["scheme", "government", "सरकार", "योजना"],
            Intent::reply(&replies.schemes),
        ),
        (
            "support",
            &["support", "help", "contact", "सहायता", "मदद"],
            Intent::reply(&replies.support),
        ),
    ];
    let rules = super::build(table)?;

    Ok(IntentRouter::new(rules, Intent::reply(&replies.fallback)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replies() -> ChatReplies {
        ChatReplies::default()
    }

    #[test]
    fn test_topics() {
        let r = chat_router(&replies()).unwrap();
        let d = replies();
        assert_eq!(r.resolve("What is the price of rice?"), Intent::reply(&d.pricing));
        assert_eq!(r.resolve("when will you deliver"), Intent::reply(&d.delivery));
        assert_eq!(r.resolve("Can I use Razorpay?"), Intent::reply(&d.payment));
        assert_eq!(r.resolve("how do I sell wheat"), Intent::reply(&d.selling));
        assert_eq!(r.resolve("any government schemes?"), Intent::reply(&d.schemes));
        assert_eq!(r.resolve("I need help"), Intent::reply(&d.support));
    }

    #[test]
    fn test_devanagari_topics() {
        let r = chat_router(&replies()).unwrap();
        let d = replies();
        assert_eq!(r.resolve("टमाटर का भाव क्या है"), Intent::reply(&d.pricing));
        assert_eq!(r.resolve("भुगतान कैसे करें"), Intent::reply(&d.payment));
        assert_eq!(r.resolve("सरकारी योजना"), Intent::reply(&d.schemes));
        assert_eq!(r.resolve("मदद चाहिए"), Intent::reply(&d.support));
    }

    #[test]
    fn test_pricing_precedes_delivery() {
        let r = chat_router(&replies()).unwrap();
        assert_eq!(
            r.resolve("delivery cost to Pune"),
            Intent::reply(&replies().pricing)
        );
    }

    #[test]
    fn test_unmatched_falls_back() {
        let r = chat_router(&replies()).unwrap();
        assert_eq!(r.resolve("xyzzy plugh"), Intent::reply(&replies().fallback));
    }

    #[test]
    fn test_configured_replies_are_used() {
        let mut custom = replies();
        custom.support = "Call 1800-180-1551".to_string();
        let r = chat_router(&custom).unwrap();
        assert_eq!(r.resolve("contact"), Intent::reply("Call 1800-180-1551"));
    }
}
