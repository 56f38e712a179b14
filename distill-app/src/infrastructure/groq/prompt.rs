use crate::domain::Template;

pub fn build_prompt(template: Template, content: &str) -> String {
    match template {
        Template::Distill => distill_prompt(content),
        Template::SocialPost => social_post_prompt(content),
        Template::Newsletter => newsletter_prompt(content),
        Template::Takeaways => takeaways_prompt(content),
        Template::ImageSuggestion => image_suggestion_prompt(content),
    }
}

fn distill_prompt(content: &str) -> String {
    format!(
        r#"You are a content distillation expert. Extract only the valuable information from the content below.

<content>
{content}
</content>

Rules:
- Keep only facts, insights, updates and actionable information.
- Never mention the source: no "this newsletter", "in this update" or "this piece discusses".
- No introduction and no conclusion about the content itself.

Format:
- Clear, direct sentences written as standalone knowledge.
- Preserve every specific number, date and statistic.
- Simple, accessible language.
- Under 1500 characters in total."#,
        content = content
    )
}

fn social_post_prompt(content: &str) -> String {
    format!(
        r#"Turn the input context into a punchy, narrative-driven social media post.

<hook>
- Open with a bold, attention-grabbing statement.
- Hint at insider knowledge and open a curiosity gap.
</hook>

<body>
- Short sentences, short paragraphs separated by blank lines.
- 3-4 key insights as a numbered or bulleted list.
- Conversational, high-energy tone with a sense of urgency.
- End with a call to action or a provocative question.
</body>

<avoid>
- Greetings, meta statements and phrases like "Here's a rewritten version".
- Lengthy introductions or technical jargon.
</avoid>

Maximum 1000 characters. Output only the post.

Input context: {content}"#,
        content = content
    )
}

fn newsletter_prompt(content: &str) -> String {
    format!(
        r#"Write a short newsletter post from the content below.

<content>
{content}
</content>

Requirements:
- A headline of at most 12 words.
- A body of 3-5 short paragraphs covering every key point, under 1500 characters.
- Professional, direct tone. No greetings or sign-offs.

Respond with a single JSON object and nothing else, using exactly these keys:
{{"title": "<headline>", "postContent": "<body>"}}"#,
        content = content
    )
}

fn takeaways_prompt(content: &str) -> String {
    format!(
        r#"List the key takeaways from the content below.

<content>
{content}
</content>

- 3 to 7 bullet points, one sentence each.
- Lead with the most important point.
- Keep specific numbers and names.
- Output only the bullet points."#,
        content = content
    )
}

fn image_suggestion_prompt(content: &str) -> String {
    format!(
        r#"Analyze this content and suggest how to represent it visually:

{content}

1. IMAGE SUGGESTION
Write a short image-generation prompt that captures the main message with clean, professional aesthetics and subtle symbolism. Avoid stock-photo looks.
Format it as:
SCENE: [core visual setup, one sentence]
STYLE: [artistic direction, one sentence]
COLORS: [color palette, one sentence]
MOOD: [emotional tone, one sentence]
DETAILS: [specific elements to include, one sentence]

2. ENGAGEMENT HOOKS
Give 3 statements that expand on the topic, share a practical insight or a little-known fact, and invite professional discussion. 1-2 sentences each.

Keep the whole response under 1500 characters."#,
        content = content
    )
}
