/// Topics offered on the generation form. Free-form topics are accepted as well.
pub const TOPICS: [&str; 15] = [
    "AWS",
    "Azure",
    "GCP",
    "Kubernetes",
    "Docker",
    "Linux",
    "Python",
    "Git",
    "DevOps",
    "ITIL",
    "PMP",
    "Scrum",
    "CompTIA A+",
    "CompTIA Network+",
    "CompTIA Security+",
];

pub const DEFAULT_QUESTION_COUNT: usize = 10;

pub const QUIZ_SYSTEM_PROMPT: &str = "You generate certification-style quizzes for technology & productivity certifications \
(AWS, Azure, GCP, Kubernetes, Docker, Linux, Python, Git, Scrum, ITIL, PMP, CompTIA, etc.). \
Only use the allowed question types. \
For multiple_choice: include 3–5 plausible choices and one correct answer that exactly matches one choice. \
For true_false: answer must be a boolean. \
For short_answer: answer is concise (1–2 sentences or a key term). \
Provide brief explanations when helpful.";
