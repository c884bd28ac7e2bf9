//! Prompt construction for the LLM-backed oracle.
//!
//! Wording is an implementation detail of this adapter; the rest of the
//! engine only sees structured entities.

use argus_common::types::{AtomicClaim, CounterArgument, Persona, CANONICAL_FALLACIES};

pub const DECOMPOSE_SYSTEM: &str =
    "You are ARGUS, a reasoning system that decomposes arguments into atomic claims. \
     Respond with valid JSON only.";

pub const ATTACK_SYSTEM: &str =
    "You are ARGUS in ATTACK mode. Attack the reasoning, never the person. \
     Respond with valid JSON only.";

pub const DEFENSE_SYSTEM: &str =
    "You are ARGUS in DEFENSE mode. Build the strongest possible case, even if you \
     disagree with it. Respond with valid JSON only.";

pub const FALLACY_SYSTEM: &str =
    "You are ARGUS's fallacy detection system. Respond with valid JSON only.";

pub fn decompose_prompt(input_text: &str) -> String {
    format!(
        r#"Input argument:
"{input_text}"

Your task:
1. Break this into ATOMIC CLAIMS — single, independently verifiable propositions
2. For each claim, identify:
   - The claim type (empirical, normative, causal, definitional, predictive)
   - Hidden assumptions the claim relies on
   - What evidence would verify or falsify it
   - Which other claims it supports or contradicts

Rules:
- Each claim should be ONE testable statement
- Extract implicit assumptions that aren't stated
- Don't add claims that aren't in the original argument
- Only reference claim ids that appear in your own output

Return valid JSON with this structure:
{{
  "claims": [
    {{
      "id": "claim_1",
      "text": "The exact claim statement",
      "claim_type": "empirical",
      "assumptions": ["Hidden assumption 1"],
      "evidence_required": "What evidence would verify this",
      "supports": [],
      "contradicts": []
    }}
  ]
}}"#
    )
}

pub fn attack_prompt(claim: &AtomicClaim, persona: Persona) -> String {
    let assumptions = if claim.assumptions.is_empty() {
        "None identified".to_string()
    } else {
        claim.assumptions.join(", ")
    };

    format!(
        r#"You are arguing as a {persona}.

Target claim: "{text}"
Claim type: {claim_type}
Hidden assumptions: {assumptions}

Your style: {style}

Generate 3-5 STRONG counterarguments using these attack vectors:
false_causality, weak_assumption, counterexample, alternative_explanation,
missing_evidence, scope_limitation, temporal_invalidity, category_error.

For each attack, rate its strength (0.0 to 1.0).

Return valid JSON:
{{
  "attacks": [
    {{
      "attack_vector": "weak_assumption",
      "counterpoint": "Your specific counterargument here",
      "supporting_evidence": "Optional: evidence for your counterpoint",
      "strength": 0.8
    }}
  ]
}}

Be ruthless but fair. Attack the logic, not the person."#,
        persona = persona.as_str(),
        text = claim.text,
        claim_type = claim.claim_type.as_str(),
        assumptions = assumptions,
        style = persona_style(persona),
    )
}

pub fn defense_prompt(claim: &AtomicClaim, attacks: &[CounterArgument]) -> String {
    let attacks_summary = if attacks.is_empty() {
        "(no attacks were generated against this claim)".to_string()
    } else {
        attacks
            .iter()
            .map(|a| {
                format!(
                    "- {}: {} (strength: {})",
                    a.attack_vector.as_str(),
                    a.counterpoint,
                    a.strength
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"Original claim: "{text}"

Attacks received:
{attacks_summary}

Your task: Create the STRONGEST possible version of this claim.

Guidelines:
1. Remove weaknesses: fix any valid criticisms from attacks
2. Add qualifications: specify scope, limitations, conditions
3. Provide evidence: add supporting data or reasoning
4. Clarify terms: define ambiguous language
5. Acknowledge limits: be honest about what the claim doesn't cover

Return valid JSON:
{{
  "strengthened_claim": "The improved claim statement",
  "additional_support": ["Supporting point 1"],
  "removed_weaknesses": ["How you addressed attack 1"]
}}"#,
        text = claim.text,
        attacks_summary = attacks_summary,
    )
}

pub fn fallacy_prompt(claims: &[AtomicClaim], original_input: &str) -> String {
    let claims_text = claims
        .iter()
        .map(|c| format!("{}: {}", c.id, c.text))
        .collect::<Vec<_>>()
        .join("\n");

    let fallacy_list = CANONICAL_FALLACIES
        .iter()
        .map(|(name, description)| format!("- {}: {}", name, description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Original argument:
"{original_input}"

Decomposed claims:
{claims_text}

Analyze for these logical fallacies:
{fallacy_list}

For each fallacy found:
- Identify the EXACT claim (by id)
- Explain WHY it's a fallacy
- Rate severity: minor, moderate, or severe

Return valid JSON:
{{
  "fallacies": [
    {{
      "fallacy_type": "false_dichotomy",
      "location": "claim_3",
      "explanation": "Why this is a false dichotomy",
      "severity": "moderate"
    }}
  ]
}}

If no fallacies found, return an empty array."#
    )
}

fn persona_style(persona: Persona) -> &'static str {
    match persona {
        Persona::Academic => {
            "Use rigorous logic, cite research methods, question operationalization"
        }
        Persona::Engineer => "Think in systems, find edge cases, ask about failure modes",
        Persona::Twitter => "Be punchy and provocative, use memorable examples",
        Persona::RedditAtheist => "Demand evidence, challenge authority, use formal logic",
        Persona::Politician => "Appeal to constituencies, point out unintended consequences",
        Persona::Economist => "Focus on incentives, opportunity costs, and unintended effects",
        Persona::Teenager => "Use relatable examples, emotional appeals, 'what if' scenarios",
        Persona::Religious => "Appeal to moral frameworks, tradition, and spiritual consequences",
        Persona::Corporate => "Focus on risks, stakeholders, and ROI impacts",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_common::types::ClaimType;

    #[test]
    fn test_attack_prompt_carries_persona_and_claim() {
        let claim = AtomicClaim::new("claim_1", "AI will replace doctors", ClaimType::Predictive);
        let prompt = attack_prompt(&claim, Persona::Economist);
        assert!(prompt.contains("economist"));
        assert!(prompt.contains("AI will replace doctors"));
        assert!(prompt.contains("predictive"));
    }

    #[test]
    fn test_fallacy_prompt_lists_canonical_vocabulary() {
        let claims = vec![AtomicClaim::new("claim_1", "x", ClaimType::Empirical)];
        let prompt = fallacy_prompt(&claims, "original");
        for (name, _) in CANONICAL_FALLACIES {
            assert!(prompt.contains(name), "missing fallacy {}", name);
        }
    }
}
