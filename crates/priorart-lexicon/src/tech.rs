//! Technology keywords and fixed multi-word compound terms

/// Concrete technology names. These always survive filtering and are ranked
/// ahead of plain tokens when queries are assembled.
pub(crate) static TECH_KEYWORDS: &[&str] = &[
    // Languages
    "python", "javascript", "typescript", "rust", "golang", "java", "kotlin", "swift", "ruby",
    "php", "scala", "elixir", "haskell", "clojure", "erlang", "lua", "dart", "julia", "zig",
    "cpp", "csharp", "perl",
    // Frontend
    "react", "vue", "angular", "svelte", "nextjs", "nuxt", "astro", "remix", "vite", "webpack",
    "tailwind", "bootstrap", "electron", "tauri", "flutter", "swiftui", "android", "ios",
    "macos", "wasm", "webassembly",
    // Backend
    "django", "flask", "fastapi", "rails", "laravel", "spring", "express", "nestjs", "phoenix",
    "actix", "axum", "tokio", "node", "nodejs", "deno",
    // Data stores
    "postgres", "postgresql", "mysql", "sqlite", "redis", "mongodb", "cassandra", "dynamodb",
    "kafka", "rabbitmq", "elasticsearch", "opensearch", "clickhouse", "duckdb", "snowflake",
    "bigquery", "supabase", "firebase", "neo4j", "pinecone", "qdrant", "weaviate", "milvus",
    "chroma",
    // Protocols and formats
    "graphql", "grpc", "rest", "websocket", "webrtc", "http", "oauth", "jwt", "sso", "saml",
    "openapi", "swagger", "protobuf", "json", "yaml", "toml", "xml", "csv", "markdown", "latex",
    "pdf", "sql", "nosql", "regex",
    // Infrastructure
    "docker", "kubernetes", "k8s", "helm", "terraform", "ansible", "jenkins", "prometheus",
    "grafana", "nginx", "linux", "ubuntu", "aws", "azure", "gcp", "cloudflare", "vercel",
    "netlify", "heroku", "serverless", "lambda",
    // AI / ML
    "llm", "gpt", "claude", "openai", "anthropic", "gemini", "llama", "mistral", "langchain",
    "llamaindex", "transformers", "pytorch", "tensorflow", "keras", "sklearn", "numpy", "pandas",
    "jupyter", "huggingface", "ollama", "whisper", "onnx", "cuda", "opencv",
    // Platforms and tooling
    "api", "sdk", "cli", "mcp", "git", "github", "gitlab", "bitbucket", "slack", "discord",
    "telegram", "whatsapp", "twilio", "twitter", "reddit", "notion", "obsidian", "jira",
    "confluence", "trello", "figma", "stripe", "paypal", "shopify", "salesforce", "hubspot",
    "zapier", "airtable", "webhook", "webhooks", "chrome", "firefox", "safari", "vscode", "vim",
    "neovim", "emacs", "unity", "unreal", "godot", "selenium", "playwright", "puppeteer",
    "cypress", "pytest", "jest", "blockchain", "ethereum", "solana", "bitcoin", "web3", "nft",
    "defi", "iot", "arduino", "excel",
];

/// Multi-word phrases extracted as a single unit before tokenization so they
/// are not split apart. Matched longest-phrase-first.
pub(crate) static COMPOUND_TERMS: &[&str] = &[
    "model context protocol",
    "natural language processing",
    "large language model",
    "retrieval augmented generation",
    "machine learning",
    "deep learning",
    "reinforcement learning",
    "computer vision",
    "speech recognition",
    "speech to text",
    "text to speech",
    "image generation",
    "object detection",
    "sentiment analysis",
    "anomaly detection",
    "knowledge graph",
    "vector database",
    "vector search",
    "semantic search",
    "full text search",
    "prompt engineering",
    "fine tuning",
    "code review",
    "code generation",
    "static analysis",
    "pull request",
    "unit testing",
    "integration testing",
    "continuous integration",
    "continuous deployment",
    "dependency injection",
    "feature flag",
    "rate limiting",
    "load balancing",
    "message queue",
    "event sourcing",
    "data pipeline",
    "data analytics",
    "time series",
    "web scraping",
    "browser extension",
    "command line",
    "terminal ui",
    "api gateway",
    "smart contract",
    "supply chain",
    "open source",
    "neural network",
    "real time",
    "low code",
    "no code",
    "edge computing",
    "augmented reality",
    "virtual reality",
    "point of sale",
    "customer support",
    "social media",
    "project management",
    "password manager",
    "note taking",
    "habit tracking",
    "meal planning",
    "language learning",
];
