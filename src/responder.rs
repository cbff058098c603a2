//! Canned replies for the website chat widget
//!
//! The message is lowercased and checked against ordered keyword sets by plain
//! substring matching. The first set with a hit wins, so a message mentioning
//! both services and pricing gets the services reply.

pub const SERVICES_REPLY: &str = "I can help you learn about our services! We offer AI Integration, Web Development, Mobile Apps, Digital Strategy, Performance Marketing, and Custom Software. Which interests you most?";

pub const PRICING_REPLY: &str = "Our pricing varies based on project scope. We offer packages starting from $1,500 for marketing, $3,000 for web development, and $5,000 for AI integration. Would you like to schedule a consultation for a detailed quote?";

pub const AI_REPLY: &str = "We're specialists in AI integration! We can help automate your business processes, implement chatbots, build predictive analytics, and create custom AI solutions. What specific AI needs do you have?";

pub const WEB_REPLY: &str = "We build modern, responsive websites using the latest technologies like React, Next.js, and Node.js. Our websites are fast, SEO-optimized, and mobile-friendly. What kind of website are you looking for?";

pub const CONTACT_REPLY: &str = "I'd be happy to connect you with our team! You can call us at +64 21 183 5253, email contact@opsvantagedigital.online, or fill out our contact form. We offer free initial consultations!";

pub const PORTFOLIO_REPLY: &str = "Check out our portfolio page to see our latest projects! We've built AI-powered e-commerce platforms, mobile banking apps, healthcare systems, and more. Each project showcases our technical expertise and results-driven approach.";

pub const FALLBACK_REPLY: &str = "Thanks for your message! I'm here to help with any questions about our services, pricing, or how we can help transform your business with AI and modern technology. What would you like to know?";

/// Keyword sets in priority order
const RULES: [(&[&str], &str); 6] = [
    (&["service", "services", "help", "what"], SERVICES_REPLY),
    (&["price", "cost", "pricing", "quote"], PRICING_REPLY),
    (&["ai", "artificial", "intelligence", "automation"], AI_REPLY),
    (&["web", "website", "development"], WEB_REPLY),
    (&["contact", "call", "meeting", "consultation"], CONTACT_REPLY),
    (&["portfolio", "work", "examples", "projects"], PORTFOLIO_REPLY),
];

/// Picks the canned reply for a chat message
pub fn respond(message: &str) -> &'static str {
    let message = message.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| message.contains(keyword)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}
