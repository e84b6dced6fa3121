//! CJK term to English substitution table

/// One CJK term mapped to the English phrase used in its place. Applied
/// longest-key-first: several 4-character compounds contain 2-character
/// entries as substrings (數據分析 contains 分析) and the compound meaning
/// must win. Both Traditional and Simplified variants are listed for the
/// common terms.
pub(crate) static CHINESE_TERMS: &[(&str, &str)] = &[
    // AI / developer tooling
    ("聊天機器人", "chatbot"),
    ("聊天机器人", "chatbot"),
    ("向量資料庫", "vector database"),
    ("向量数据库", "vector database"),
    ("知識圖譜", "knowledge graph"),
    ("知识图谱", "knowledge graph"),
    ("自然語言", "nlp"),
    ("自然语言", "nlp"),
    ("機器學習", "machine learning"),
    ("机器学习", "machine learning"),
    ("深度學習", "deep learning"),
    ("深度学习", "deep learning"),
    ("人工智慧", "ai"),
    ("人工智能", "ai"),
    ("數據分析", "data analytics"),
    ("数据分析", "data analytics"),
    ("可觀測性", "observability"),
    ("可观测性", "observability"),
    ("工作流程", "workflow"),
    ("大模型", "llm"),
    ("資料庫", "database"),
    ("数据库", "database"),
    ("儀表板", "dashboard"),
    ("仪表板", "dashboard"),
    ("工作流", "workflow"),
    ("自動化", "automation"),
    ("自动化", "automation"),
    ("機器人", "bot"),
    ("机器人", "bot"),
    ("程式碼", "code"),
    ("行事曆", "calendar"),
    ("房地產", "real estate"),
    ("房地产", "real estate"),
    ("爬蟲", "crawler"),
    ("爬虫", "crawler"),
    ("監控", "monitoring"),
    ("监控", "monitoring"),
    ("監測", "monitoring"),
    ("評測", "evaluation"),
    ("评测", "evaluation"),
    ("評估", "evaluation"),
    ("评估", "evaluation"),
    ("搜尋", "search"),
    ("搜索", "search"),
    ("檢索", "retrieval"),
    ("检索", "retrieval"),
    ("查詢", "search"),
    ("查询", "search"),
    ("推薦", "recommendation"),
    ("推荐", "recommendation"),
    ("排程", "scheduling"),
    ("排班", "scheduling"),
    ("翻譯", "translation"),
    ("翻译", "translation"),
    ("語音", "voice"),
    ("语音", "voice"),
    ("影像", "image"),
    ("圖片", "image"),
    ("图片", "image"),
    ("日誌", "logging"),
    ("日志", "logging"),
    ("告警", "alerting"),
    ("警報", "alerting"),
    ("測試", "testing"),
    ("测试", "testing"),
    ("部署", "deployment"),
    ("容器", "container"),
    ("雲端", "cloud"),
    ("云端", "cloud"),
    ("前端", "frontend"),
    ("後端", "backend"),
    ("后端", "backend"),
    ("開源", "open source"),
    ("开源", "open source"),
    ("代碼", "code"),
    ("代码", "code"),
    ("網站", "website"),
    ("网站", "website"),
    ("框架", "framework"),
    ("系統", "system"),
    ("系统", "system"),
    ("平台", "platform"),
    ("工具", "tool"),
    ("應用", "app"),
    ("应用", "app"),
    ("助手", "assistant"),
    ("智慧", "smart"),
    ("智能", "smart"),
    ("自動", "automated"),
    ("自动", "automated"),
    ("分析", "analysis"),
    ("數據", "data"),
    ("数据", "data"),
    ("資料", "data"),
    ("资料", "data"),
    ("日曆", "calendar"),
    ("日历", "calendar"),
    // Non-tech domains
    ("中醫", "tcm"),
    ("中医", "tcm"),
    ("針灸", "acupuncture"),
    ("针灸", "acupuncture"),
    ("穴位", "acupoint"),
    ("問診", "consultation"),
    ("问诊", "consultation"),
    ("醫療", "healthcare"),
    ("医疗", "healthcare"),
    ("診所", "clinic"),
    ("诊所", "clinic"),
    ("藥物", "medication"),
    ("药物", "medication"),
    ("健康", "health"),
    ("寵物", "pet"),
    ("宠物", "pet"),
    ("追蹤", "tracking"),
    ("追踪", "tracking"),
    ("法律", "legal"),
    ("文件", "document"),
    ("合約", "contract"),
    ("合同", "contract"),
    ("農業", "agriculture"),
    ("农业", "agriculture"),
    ("灌溉", "irrigation"),
    ("佛教", "buddhism"),
    ("經文", "scripture"),
    ("经文", "scripture"),
    ("教育", "education"),
    ("學習", "learning"),
    ("学习", "learning"),
    ("遊戲", "game"),
    ("游戏", "game"),
    ("音樂", "music"),
    ("音乐", "music"),
    ("新聞", "news"),
    ("新闻", "news"),
    ("天氣", "weather"),
    ("天气", "weather"),
    ("股票", "stock"),
    ("財務", "finance"),
    ("财务", "finance"),
    ("記帳", "bookkeeping"),
    ("记账", "bookkeeping"),
    ("提醒", "reminder"),
    ("通知", "notification"),
    ("支付", "payment"),
    ("電商", "ecommerce"),
    ("电商", "ecommerce"),
    ("餐廳", "restaurant"),
    ("餐厅", "restaurant"),
    ("食譜", "recipe"),
    ("食谱", "recipe"),
    ("營養", "nutrition"),
    ("营养", "nutrition"),
    ("運動", "fitness"),
    ("运动", "fitness"),
    ("睡眠", "sleep"),
    ("旅遊", "travel"),
    ("旅游", "travel"),
    ("招聘", "recruiting"),
    ("徵才", "recruiting"),
];
