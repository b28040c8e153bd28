/// Audio controller for builds without a DOM audio element.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<PlayerController>();
    use_transport_sync(controller);

    rsx! {}
}
