//! Canned-answer lookup behind `assistant ask`.

const STRENGTHS_ANSWER: &str = "My key strengths include: Systems thinking, technical proficiency in Python and data analysis, business acumen from MBA studies, leadership experience, and a proven track record of delivering measurable results.";
const EXPERIENCE_ANSWER: &str = "I have diverse experience across Network International (Sales Operations & QA), Youth Agenda (Communications), Tradco Agency (Sales), and Oigetit (Communications Lead).";
const TECHNICAL_SKILLS_ANSWER: &str = "I specialize in Python, R, HTML5, CSS3, Django, Git, AWS, Power BI, Zoho CRM, PostgreSQL, and MySQL with expertise in data analysis, machine learning, and full-stack development.";
const PROJECTS_ANSWER: &str = "My key projects include Twitter Sentiment Analysis (Python/ML), Sales Dashboard Systems (Power BI), CRM Optimization (Zoho), and QA Automation Frameworks.";
const EDUCATION_ANSWER: &str = "I hold a Bachelor of Science in Computer Science from University of Eldoret and am currently pursuing an MBA in Strategic Management at USIU.";
const HIRE_ANSWER: &str = "I bring unique value through my combination of technical expertise and business strategy, with proven results including 88% efficiency improvement and 30% engagement boost.";

pub const FALLBACK_ANSWER: &str = "I'm a professional with expertise in full-stack development, data analysis, sales operations, and strategic management. Feel free to ask about my specific skills, experience, or projects.";

// Substring containment over the lowercased question, first hit wins. The
// order is part of the contract: "technical skills" must be tested before
// any shorter key that could shadow it.
const ANSWERS: &[(&str, &str)] = &[
    ("strengths", STRENGTHS_ANSWER),
    ("experience", EXPERIENCE_ANSWER),
    ("technical skills", TECHNICAL_SKILLS_ANSWER),
    ("projects", PROJECTS_ANSWER),
    ("education", EDUCATION_ANSWER),
    ("hire", HIRE_ANSWER),
];

pub fn answer(question: &str) -> &'static str {
    let normalized = question.to_lowercase();
    for (keyword, reply) in ANSWERS {
        if normalized.contains(keyword) {
            return reply;
        }
    }
    FALLBACK_ANSWER
}
