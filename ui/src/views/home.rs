use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::api;
use crate::components::PremiumModal;
use crate::core::workflow::{self, SelectedFile, SubmitGate, UploadPhase};
use crate::core::{config, platform, quota, storage};
use crate::report::{ReportSections, RESULTS_ANCHOR_ID};

#[component]
pub fn Home() -> Element {
    // Reading the quota during signal init performs the stale-date rollover,
    // so the blocked indicator is correct from the first frame.
    let mut blocked = use_signal(|| {
        workflow::blocked_on_load(storage::local_store(), &quota::today_key())
    });
    let mut phase = use_signal(UploadPhase::default);
    let mut selected = use_signal(|| Option::<SelectedFile>::None);
    let mut show_premium = use_signal(|| false);

    // Bring fresh results into view, once per new report.
    use_effect(move || {
        if matches!(phase(), UploadPhase::Completed(_)) {
            platform::scroll_into_view(RESULTS_ANCHOR_ID);
        }
    });

    let on_file_change = move |evt: FormEvent| {
        spawn(async move {
            let Some(file_engine) = evt.files() else {
                return;
            };
            let Some(name) = file_engine.files().first().cloned() else {
                return;
            };
            if let Some(bytes) = file_engine.read_file(&name).await {
                // A new selection replaces the prior one.
                selected.set(Some(SelectedFile { name, bytes }));
                if matches!(phase(), UploadPhase::Idle | UploadPhase::Failed(_)) {
                    phase.set(UploadPhase::Ready);
                }
            }
        });
    };

    let on_submit = move |_| {
        // No file selected: a no-op, not an error.
        let Some(file) = selected() else {
            return;
        };
        if blocked() || phase().is_submitting() {
            return;
        }

        spawn(async move {
            let today = quota::today_key();
            match workflow::preflight(storage::local_store(), &today) {
                SubmitGate::Blocked => {
                    blocked.set(true);
                    return;
                }
                SubmitGate::Proceed => {}
            }

            phase.set(UploadPhase::Submitting);
            let SelectedFile { name, bytes } = file;
            match api::analyze_file(&name, bytes).await {
                Ok(report) => {
                    info!(file = %name, rows = report.row_count, "analysis completed");
                    phase.set(UploadPhase::Completed(report));
                    // The date may have rolled over during the request.
                    let today = quota::today_key();
                    blocked.set(workflow::settle_success(storage::local_store(), &today));
                    selected.set(None);
                }
                Err(err) => {
                    warn!(file = %name, error = %err, "analysis failed");
                    // The allowance stays untouched on failure.
                    phase.set(UploadPhase::Failed(err.to_string()));
                }
            }
        });
    };

    let snapshot = phase();
    let submitting = snapshot.is_submitting();
    let submit_disabled = blocked() || submitting;
    let failed_message = match &snapshot {
        UploadPhase::Failed(message) => Some(message.clone()),
        _ => None,
    };
    let completed_report = match snapshot {
        UploadPhase::Completed(report) => Some(report),
        _ => None,
    };
    let checkout = config::checkout_url();

    rsx! {
        section { class: "page page-home",
            header { class: "page-home__header",
                h1 { "Excel / CSV dosyalarınızı saniyeler içinde rapora dönüştürün" }
            }

            div { class: "upload-controls",
                input {
                    r#type: "file",
                    class: "upload-controls__file",
                    accept: ".csv,.xlsx,.xls",
                    onchange: on_file_change,
                }
                button {
                    r#type: "button",
                    class: "upload-controls__submit",
                    disabled: submit_disabled,
                    onclick: on_submit,
                    if submitting { "Gönderiliyor…" } else { "Gönder" }
                }
            }
            p { class: "page-home__note", "Dosyanız kaydedilmez, sadece analiz edilir." }

            if blocked() {
                section { class: "notice notice--blocked",
                    p { class: "notice__headline", "Günlük ücretsiz rapor limitine ulaştınız." }
                    p { class: "notice__body", "Premium ile sınırsız rapor oluşturun." }
                    if let Some(url) = checkout {
                        a { class: "notice__cta", href: url, "Premium'a geç" }
                    } else {
                        button {
                            r#type: "button",
                            class: "notice__cta",
                            onclick: move |_| show_premium.set(true),
                            "Premium'a geç"
                        }
                    }
                }
            }

            if let Some(message) = failed_message {
                section { class: "notice notice--failed",
                    p { class: "notice__headline", "Rapor oluşturulamadı." }
                    p { class: "notice__body", "{message}" }
                }
            }

            if show_premium() {
                PremiumModal { on_close: move |_| show_premium.set(false) }
            }

            if let Some(report) = completed_report {
                ReportSections { report }
            }
        }
    }
}
