// CV extraction LLM prompt templates.
// All prompts for the cv module are defined here.

/// System message — restates the JSON-only contract for chat-style endpoints.
pub const CV_EXTRACTION_SYSTEM: &str = "\
You are an expert CV analyzer for automated MCQ generation. \
Extract structured candidate data precisely and return strictly valid JSON.";

/// Extraction template. Replace `{cv_text}` before sending.
pub const CV_EXTRACTION_PROMPT: &str = r#"
You are an expert CV analyzer for automated MCQ generation. Extract structured candidate data **precisely**. Eliminate duplicates and ensure consistency.

Return a clean JSON with:

1) Basic information
- full_name (extract EXACT name as written in CV - no modifications)
- email (Extract the candidate's email address exactly as written in CV. The email may be embedded with special characters.
- phone (extract EXACT phone number as written in CV)

2) Experience summary
- experience_level (intern / junior / mid / senior)
- total_experience_duration (count months from formal work experience/internships only)

3) Technical profile
- primary_domains (max 5 main domains)
- core_skills (most demonstrated skills)
- secondary_skills (less demonstrated skills)
- skill_levels (beginner / intermediate / advanced for each skill)

4) Technology classification
Automatically group all technical skills into logical categories based on their function and context. Create categories dynamically based on technologies found in the CV. Use these standard categories and place each technology in the most appropriate one:
- Programming languages (Python, Java, JavaScript, TypeScript, C, C++, PHP, SQL)
- Web frameworks (React, Angular, Django, Express, Next.js, Nuxt.js, Spring Boot, Symfony, FastAPI)
- Databases (MySQL, PostgreSQL, MongoDB, etc.)
- AI/ML libraries (TensorFlow, OpenCV, NumPy, Pandas, Streamlit, etc.)
- Cloud platforms (AWS, Azure, GCP, etc.)
- Development tools (VS Code, Git, GitHub, Postman, Figma, etc.)
- Deployment platforms (Vercel, Netlify, Heroku, etc.)
- Collaboration tools (Slack, Notion, ClickUp, etc.)
- Desktop/GUI development (Java Swing, JavaFX, Electron, etc.)
- Mobile development (React Native, Flutter, Swift, Kotlin, etc.)
- Other specialized categories as needed based on specific technologies

CRITICAL:
- No technology should appear in multiple categories
- No empty categories should be created
- Each technology must be placed in exactly one appropriate category based on its primary function

5) Project & experience analysis
- strongest_technologies (technologies most used across projects and internships)
- main_project_types (e.g., web application, mobile app, AI system, API, etc.)
- responsibility_level (academic / personal / professional / internship)

6) Education
- highest_degree (extract EXACT degree name as written in CV)
- current_field_of_study (extract EXACT field of study as written in CV. If not explicitly mentioned, return null)

7) Additional information
- projects_list (ALL projects with name and brief description - include academic projects, internships, personal projects, professional work)
- positions_sought (ONLY positions explicitly mentioned in CV - return empty array if none found)
- internships (ALL internships with company, position, duration - extract duration as "X months" or "X years" format for clarity)

Rules:
- Extract ONLY what is explicitly stated in CV
- Ensure consistency between technical profile and technology classification
- For duration: calculate precisely from dates provided in CV
- Return strictly valid JSON

CV:
{cv_text}
"#;

/// The template's single substitution variable.
pub const CV_TEXT_PLACEHOLDER: &str = "{cv_text}";
