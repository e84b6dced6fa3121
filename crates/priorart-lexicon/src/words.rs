//! English stop words and boilerplate product-pitch words

/// Common English stop words dropped during tokenization.
pub(crate) static STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "shall", "can",
    "need", "dare", "ought", "used", "to", "of", "in", "for", "on", "with", "at", "by", "from",
    "as", "into", "through", "during", "before", "after", "above", "below", "between", "out",
    "off", "over", "under", "again", "further", "then", "once", "here", "there", "when", "where",
    "why", "how", "all", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "just", "don", "now",
    "and", "but", "or", "if", "while", "that", "which", "what", "this", "these", "those", "am",
    "it", "its", "i", "me", "my", "we", "our", "you", "your", "he", "him", "his", "she", "her",
    "they", "them", "their", "who", "whom", "up", "about", "like", "want", "build", "make",
    "create", "app", "tool", "using", "use", "thing", "something",
];

/// Pitch-deck filler that matches almost any product idea. Dropped unless the
/// word is also a technology keyword or intent anchor.
pub(crate) static BOILERPLATE_WORDS: &[&str] = &[
    "ai", "platform", "system", "systems", "solution", "service", "services", "software",
    "application", "applications", "apps", "tools", "product", "products", "website", "online",
    "digital", "tech", "powered", "based", "driven", "enabled", "smart", "intelligent",
    "automatic", "automated", "simple", "easy", "fast", "modern", "helper", "manager", "builder",
    "generator", "startup", "idea", "ideas", "project", "user", "users", "people", "business",
    "better", "best", "new", "great", "awesome", "innovative", "custom", "personal",
];
