//! Premium interest capture overlay.

use dioxus::prelude::*;

use crate::core::premium::{CaptureStage, PremiumCapture, PriceOption};
use crate::core::storage;

#[component]
pub fn PremiumModal(on_close: EventHandler<()>) -> Element {
    let mut capture = use_signal(PremiumCapture::new);
    let mut email = use_signal(String::new);

    let snapshot = capture();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                p { class: "modal__title", "Premium'a geçmek ister misiniz?" }

                if snapshot.stage == CaptureStage::Saved {
                    p { class: "modal__thanks", "Teşekkürler, yakında yazacağız." }
                } else {
                    p { class: "modal__question", "Aylık hangi fiyat sana daha mantıklı?" }
                    div { class: "modal__options",
                        for option in PriceOption::ALL {
                            button {
                                r#type: "button",
                                class: if snapshot.choice == Some(option) {
                                    "modal__option modal__option--active"
                                } else {
                                    "modal__option"
                                },
                                onclick: move |_| {
                                    capture.with_mut(|flow| {
                                        flow.choose(option, storage::local_store())
                                    });
                                },
                                {option.label()}
                            }
                        }
                    }
                    input {
                        r#type: "email",
                        class: "modal__email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    button {
                        r#type: "button",
                        class: "modal__save",
                        onclick: move |_| {
                            capture.with_mut(|flow| {
                                flow.submit_email(&email(), storage::local_store())
                            });
                        },
                        "Beni listeye ekle"
                    }
                }

                button {
                    r#type: "button",
                    class: "modal__close",
                    onclick: move |_| on_close.call(()),
                    "Kapat"
                }
            }
        }
    }
}
