//! Seeded sample catalog
//!
//! The sample data set used by tests and development deployments: two
//! application workflows and two learning workflows with their step
//! checklists.

use guidepath_core::{Resource, Step, StepId, Workflow, WorkflowId, WorkflowKind};

use crate::InMemoryWorkflowCatalog;

struct StepSeed {
    title: &'static str,
    description: &'static str,
    checklist: &'static [&'static str],
}

async fn seed_workflow(
    catalog: &InMemoryWorkflowCatalog,
    id: &str,
    title: &str,
    description: &str,
    kind: WorkflowKind,
    category: &str,
    steps: &[StepSeed],
) {
    catalog
        .insert_workflow(Workflow {
            id: WorkflowId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            kind,
            category: category.to_string(),
        })
        .await;

    for (index, seed) in steps.iter().enumerate() {
        catalog
            .insert_step(Step {
                id: StepId::new(format!("{}-step-{}", id, index + 1)),
                workflow_id: WorkflowId::new(id),
                order: (index + 1) as u32,
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                checklist: seed.checklist.iter().map(|s| s.to_string()).collect(),
            })
            .await;
    }
}

/// Build a catalog populated with the sample workflows.
pub async fn sample_catalog() -> InMemoryWorkflowCatalog {
    let catalog = InMemoryWorkflowCatalog::new();

    seed_workflow(
        &catalog,
        "wf-pan-card",
        "Apply for PAN Card",
        "Step-by-step guide to apply for a Permanent Account Number (PAN).",
        WorkflowKind::Apply,
        "Government",
        &[
            StepSeed {
                title: "Visit Protean (NSDL) Website",
                description: "Go to the official Protean portal.",
                checklist: &[
                    "Open https://www.protean-tinpan.com/services/pan/pan-index.html",
                    "Select \"Apply for PAN\"",
                    "Select Category: Individual",
                ],
            },
            StepSeed {
                title: "Fill Personal Details",
                description: "Enter details exactly as per Aadhaar.",
                checklist: &[
                    "Enter Name & DOB",
                    "Enter Email & Mobile",
                    "Submit and save Token Number",
                ],
            },
            StepSeed {
                title: "Submit Documents",
                description: "Use Aadhaar e-KYC for paperless submission.",
                checklist: &[
                    "Select \"Submit digitally through e-KYC\"",
                    "Enter Aadhaar Number",
                    "Authenticate via OTP",
                ],
            },
            StepSeed {
                title: "Payment & Submission",
                description: "Pay the fee and download the acknowledgement.",
                checklist: &["Pay via UPI/Card", "Download Acknowledgement"],
            },
        ],
    )
    .await;

    seed_workflow(
        &catalog,
        "wf-voter-id",
        "Apply for Voter ID Card",
        "Register as a new voter (Form 6) via the NVSP portal.",
        WorkflowKind::Apply,
        "Government",
        &[
            StepSeed {
                title: "Visit NVSP Portal",
                description: "Go to the National Voters' Service Portal.",
                checklist: &[
                    "Sign up/Login with Mobile",
                    "Select \"New Registration for General Electors\" (Form 6)",
                ],
            },
            StepSeed {
                title: "Fill Form 6",
                description: "Enter personal details and upload photos.",
                checklist: &[
                    "Upload Passport Size Photo",
                    "Enter Name, Gender, DOB",
                    "Enter Address details accurately",
                ],
            },
            StepSeed {
                title: "Upload Proofs",
                description: "Provide Age and Address proof.",
                checklist: &[
                    "Age Proof: Birth Cert, Aadhaar, PAN",
                    "Address Proof: Aadhaar, Passport, Ration Card",
                ],
            },
            StepSeed {
                title: "Submit & Track",
                description: "Note the Reference ID.",
                checklist: &[
                    "Submit the form",
                    "Use Reference ID to track status",
                    "Card delivered by post in 30-45 days",
                ],
            },
        ],
    )
    .await;

    seed_workflow(
        &catalog,
        "wf-banking-basics",
        "Banking Basics",
        "Understand types of accounts, deposits, and safety.",
        WorkflowKind::Learn,
        "Personal Finance",
        &[
            StepSeed {
                title: "Savings vs Current Accounts",
                description: "Savings is for personal use with interest; Current is for business.",
                checklist: &[
                    "Check interest rates",
                    "Understand minimum balance penalties",
                ],
            },
            StepSeed {
                title: "Fixed Deposits (FD)",
                description: "Safe investment with higher interest than savings.",
                checklist: &["Compare FD rates (6-8%)", "Understand lock-in periods"],
            },
            StepSeed {
                title: "Cheques & Demand Drafts",
                description: "Traditional payment methods explained.",
                checklist: &["How to fill a cheque", "When to use a DD"],
            },
        ],
    )
    .await;

    seed_workflow(
        &catalog,
        "wf-income-tax",
        "Income Tax Basics",
        "Demystifying tax slabs, deductions, and filing.",
        WorkflowKind::Learn,
        "Tax",
        &[
            StepSeed {
                title: "Old vs New Tax Regime",
                description: "Understand the two options for calculating tax.",
                checklist: &[
                    "New Regime: Lower rates, no deductions",
                    "Old Regime: Higher rates, many deductions (80C, HRA)",
                ],
            },
            StepSeed {
                title: "Key Deductions (Sec 80C)",
                description: "Save tax by investing.",
                checklist: &["PPF, ELSS, LIC", "Max limit: 1.5 Lakhs"],
            },
            StepSeed {
                title: "Filing ITR",
                description: "When and how to file returns.",
                checklist: &["File before July 31", "Use the income tax e-filing portal"],
            },
        ],
    )
    .await;

    // Catalog-attached reference for the PAN portal step
    catalog
        .insert_resource(Resource {
            id: "res-pan-portal".to_string(),
            step_id: StepId::new("wf-pan-card-step-1"),
            title: "Protean PAN services portal".to_string(),
            url: "https://www.protean-tinpan.com/services/pan/pan-index.html".to_string(),
        })
        .await;

    catalog
}
