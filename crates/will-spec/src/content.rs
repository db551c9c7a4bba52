//! Static reference content: the three-step process overview and the glossary.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub title: &'static str,
    pub body: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    pub title: &'static str,
    pub body: &'static str,
    pub tag: &'static str,
}

impl GlossaryEntry {
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.body.to_lowercase().contains(needle)
            || self.tag.to_lowercase().contains(needle)
    }
}

const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Drafting",
        body: "Start with clarity: name an executor (estate trustee), list beneficiaries, and describe gifts. For minor children, name a guardian. Keep language specific and consistent.",
        bullets: &[
            "Choose your executor (and a backup). Confirm they’re willing.",
            "List beneficiaries and define the residue (what’s left after specific gifts).",
            "If you have minor children, consider guardianship wording.",
            "Make a simple asset map: accounts, property, vehicles, valuables, digital assets.",
            "Avoid vague gifts like “my jewelry” unless you define what that means.",
        ],
    },
    ProcessStep {
        title: "Execution (Signing)",
        body: "Most Ontario Wills must be signed by the testator in the presence of two witnesses who are present at the same time, and the witnesses must sign in the testator’s presence. If you can’t arrange witnesses, a holograph Will may be an option.",
        bullets: &[
            "Use two independent witnesses (not beneficiaries, and not a beneficiary’s spouse).",
            "Sign at the end of the Will; witnesses sign after watching you sign/acknowledge.",
            "Everyone should be together (or use permitted audio-visual witnessing rules).",
            "If remote witnessing: typically requires one witness to be an Ontario lawyer/paralegal.",
            "If your situation is complex, get advice before signing.",
        ],
    },
    ProcessStep {
        title: "Storage",
        body: "Your Will only works if the original can be found. Store it securely, and make sure your executor knows where it is.",
        bullets: &[
            "Store the original in a safe place (lawyer’s office, safe deposit box, home safe).",
            "Tell your executor how to access it; leave clear instructions.",
            "Keep a scanned copy for reference, but preserve the original.",
            "Avoid altering the signed original (no casual edits—use a proper codicil/new Will).",
            "Review after major life events: new spouse, separation, children, major assets.",
        ],
    },
];

const GLOSSARY: &[GlossaryEntry] = &[
    GlossaryEntry {
        title: "Testator",
        body: "The person who makes the Will.",
        tag: "Basics",
    },
    GlossaryEntry {
        title: "Executor (Estate Trustee)",
        body: "The person who administers the estate: pays debts/taxes, gathers assets, and distributes gifts according to the Will.",
        tag: "Roles",
    },
    GlossaryEntry {
        title: "Beneficiary",
        body: "A person or organization who receives a gift under the Will.",
        tag: "Basics",
    },
    GlossaryEntry {
        title: "Witness (Attesting Witness)",
        body: "A person who watches the testator sign/acknowledge the Will and signs to confirm proper execution. In Ontario, most Wills require two witnesses present at the same time.",
        tag: "Execution",
    },
    GlossaryEntry {
        title: "Holograph Will",
        body: "A Will that is wholly handwritten and signed by the testator. In Ontario, it can be valid without witnesses if it meets the handwriting requirement.",
        tag: "Types",
    },
    GlossaryEntry {
        title: "Codicil",
        body: "A legal document that amends a Will. It must be executed with the same formalities as a Will (or be a valid holograph codicil).",
        tag: "Updates",
    },
    GlossaryEntry {
        title: "Residue",
        body: "Everything left in the estate after debts, taxes, expenses, and specific gifts are handled.",
        tag: "Drafting",
    },
    GlossaryEntry {
        title: "Probate (Certificate of Appointment)",
        body: "A court process that confirms the executor’s authority to deal with estate assets (often needed for banks and land transfers).",
        tag: "Court",
    },
    GlossaryEntry {
        title: "Intestacy",
        body: "Dying without a valid Will. Ontario’s default distribution rules apply, which may not match your preferences.",
        tag: "Risk",
    },
    GlossaryEntry {
        title: "Dependent Support",
        body: "In Ontario, certain dependants may have claims for support even if the Will does not provide adequately.",
        tag: "Risk",
    },
    GlossaryEntry {
        title: "Guardianship (Minor Children)",
        body: "A Will can express who you want to act as guardian for minor children. The court may still consider the child’s best interests.",
        tag: "Family",
    },
    GlossaryEntry {
        title: "Capacity (Testamentary Capacity)",
        body: "The legal ability to make a Will: generally understanding what a Will is, the nature of your assets, and who might reasonably expect to benefit.",
        tag: "Risk",
    },
    GlossaryEntry {
        title: "Undue Influence",
        body: "Pressure that overwhelms the testator’s free will. It can lead to disputes and possible invalidation of gifts or the Will.",
        tag: "Risk",
    },
    GlossaryEntry {
        title: "Remote Witnessing",
        body: "Ontario permits remote signing/witnessing by audio-visual communication technology in certain situations (commonly requiring one witness to be an Ontario lawyer or paralegal).",
        tag: "Execution",
    },
    GlossaryEntry {
        title: "Substantial Compliance (Court Validation)",
        body: "Ontario courts have limited authority to validate certain imperfect documents that show testamentary intention, but it is not guaranteed—best practice is to execute correctly.",
        tag: "Court",
    },
];

pub fn process_steps() -> &'static [ProcessStep] {
    PROCESS_STEPS
}

pub fn glossary() -> &'static [GlossaryEntry] {
    GLOSSARY
}

/// Case-insensitive substring search over title, body and tag. An empty query matches everything.
pub fn search_glossary(query: &str) -> Vec<&'static GlossaryEntry> {
    let needle = query.trim().to_lowercase();
    GLOSSARY
        .iter()
        .filter(|entry| needle.is_empty() || entry.matches(&needle))
        .collect()
}

pub fn term_count_label(count: usize) -> String {
    if count == 1 {
        "1 term".to_string()
    } else {
        format!("{count} terms")
    }
}

/// Cursor over the process steps, always clamped to a valid step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stepper {
    index: usize,
}

impl Stepper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static ProcessStep {
        &PROCESS_STEPS[self.index]
    }

    pub fn goto(&mut self, index: usize) -> &'static ProcessStep {
        self.index = index.min(PROCESS_STEPS.len() - 1);
        self.current()
    }

    pub fn next(&mut self) -> &'static ProcessStep {
        self.goto(self.index + 1)
    }

    pub fn prev(&mut self) -> &'static ProcessStep {
        self.goto(self.index.saturating_sub(1))
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < PROCESS_STEPS.len()
    }
}
