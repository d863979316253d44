use leptos::prelude::*;
use thaw::*;

/// Диалог подтверждения разрушающего действия.
///
/// Закрытие диалога крестиком или кликом по фону равносильно отмене:
/// владелец следит за `open` и сам сбрасывает ожидающее действие.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] confirm_label: Signal<String>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || title.get()}</DialogTitle>
                    <DialogContent>
                        <p class="confirm-dialog__message">{move || message.get()}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            "Annuler"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                        >
                            {move || confirm_label.get()}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
