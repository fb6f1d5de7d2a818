use std::collections::HashMap;

use indoc::indoc;
use subst::substitute;

use crate::{Error, GenerationRequest};

/// A composed two-part chat instruction: invariant system text plus the
/// per-request user text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

/// Invariant system instruction. Mandates a JSON object with exactly the two
/// keys `llms_txt` and `llms_full_txt` -- which [`crate::interpret_completion`]
/// then validates rather than trusts.
const SYSTEM_PROMPT: &str = indoc! {r#"
    You are an expert assistant that creates LLMs.txt files for websites.
    The user will provide information about their site: name, overview, key pages,
    and any extra notes or links.

    Your job is to return two separate pieces of Markdown text in JSON format:

    1) "llms_txt": A short, basic LLMs.txt version (like a site map for AI).
    2) "llms_full_txt": A more comprehensive version (llms-full.txt) that provides
       detailed information, including extended documentation, code snippets, etc.

    The files should have url links to the key pages mentioned.

    Return them as a valid JSON object with exactly two keys: "llms_txt" and "llms_full_txt".

    Example JSON output:
    {
      "llms_txt": "...(short text in Markdown)...",
      "llms_full_txt": "...(detailed text in Markdown)..."
    }

    Make sure these are valid Markdown strings.
    Do not include any additional keys.
"#};

const USER_PROMPT: &str = indoc! {r#"
    Please create two files, llms.txt and llms-full.txt, in Markdown based on the following website information:

    Website Name: ${WEBSITE_NAME}
    Overview: ${OVERVIEW}
    Key Pages: ${KEY_PAGES}
    Additional Notes: ${NOTES}

    Remember:
    - "llms.txt" is a brief overview, covering site structure and main pages.
    - "llms-full.txt" is a more comprehensive version with extended details.
    - Return both in JSON: with keys "llms_txt" and "llms_full_txt".
"#};

/// Builds the two-part instruction for one request. The four request fields
/// are interpolated verbatim -- no escaping or sanitization.
pub fn compose_prompt(request: &GenerationRequest) -> Result<ChatPrompt, Error> {
    let user = substitute(USER_PROMPT, &{
        let mut v = HashMap::new();
        v.insert("WEBSITE_NAME".to_string(), request.site_name.clone());
        v.insert("OVERVIEW".to_string(), request.overview.clone());
        v.insert("KEY_PAGES".to_string(), request.key_pages.clone());
        v.insert("NOTES".to_string(), request.notes.clone());
        v
    })?;
    Ok(ChatPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    })
}
