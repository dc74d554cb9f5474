//! Printable card preview: front face of the physical ID card plus a
//! print button driving the browser's native print dialog.

use contracts::domain::a003_hse_card::HseCard;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

/// Accent color per card type, Default for unknown types.
fn card_accent(card_type_name: &str) -> &'static str {
    match card_type_name {
        "Safety" => "#15803d",
        "Visitor" => "#1d4ed8",
        "Contractor" => "#b91c1c",
        _ => "#4b5563",
    }
}

#[component]
pub fn PrintCardDialog<F>(card: HseCard, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    let accent = card_accent(&card.card_type_name);

    let handle_print = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    view! {
        <ModalFrame on_close=Callback::new(move |_| on_close()) modal_style="max-width: 760px;".to_string()>
            <div class="modal-header no-print">
                <h2 class="modal-title">"Card preview"</h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_close()
                >
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body">
                <div class="print-card" style="width: 60mm; height: 95mm; border: 1px solid #ddd; border-radius: 12px; overflow: hidden; background: white; display: flex; flex-direction: column; margin: 0 auto;">
                    <div style=format!("height: 28mm; background: {}; border-radius: 0 0 50% 50%; display: flex; flex-direction: column; justify-content: center; align-items: center; color: white;", accent)>
                        <h1 style="font-weight: bold; font-size: 13px; margin: 0;">"HSE MANAGEMENT"</h1>
                        <p style="font-size: 9px; margin: 0;">"Work safe, go home safe"</p>
                    </div>

                    <div style="text-align: center; margin-top: 6px;">
                        <h2 style="font-weight: bold; font-size: 15px; margin: 0;">{card.user_name.clone()}</h2>
                        <p style=format!("color: {}; font-size: 11px; margin: 0;", accent)>{card.card_type_name.clone()}</p>
                    </div>

                    <div style="padding: 0 14px; margin-top: 8px; font-size: 9px; line-height: 1.6;">
                        <p style="margin: 0;"><span style="font-weight: 600;">"Card no: "</span>{card.card_number.clone()}</p>
                        <p style="margin: 0;"><span style="font-weight: 600;">"Issued by: "</span>{card.issued_by_name.clone()}</p>
                        <p style="margin: 0;"><span style="font-weight: 600;">"Issued: "</span>{format_date(&card.issued_date)}</p>
                        <p style="margin: 0;"><span style="font-weight: 600;">"Expires: "</span>{format_date(&card.expired_date)}</p>
                        {card.notes.clone().map(|n| view! {
                            <p style="margin: 0;"><span style="font-weight: 600;">"Notes: "</span>{n}</p>
                        })}
                    </div>

                    <div style=format!("margin-top: auto; height: 12mm; background: {}; border-radius: 50% 50% 0 0;", accent)></div>
                </div>
            </div>

            <div class="modal-footer no-print">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close()
                >
                    "Close"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_print
                >
                    {icon("printer")}
                    " Print"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_falls_back_for_unknown_types() {
        assert_eq!(card_accent("Safety"), "#15803d");
        assert_eq!(card_accent("Working at Height"), "#4b5563");
    }
}
