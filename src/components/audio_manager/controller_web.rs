/// Audio controller - manages playback imperatively
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<PlayerController>();
    let source = use_memo(move || controller.track().map(|track| track.url));
    let mut last_src = use_signal(|| None::<String>);

    // One-time setup: fold element events back into state.
    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };
        let runtime = Runtime::current();

        let time_closure = {
            let runtime = runtime.clone();
            let mut controller = controller;
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                if let Some(audio) = get_or_create_audio_element() {
                    controller.fold_time_update(audio.current_time());
                }
            }) as Box<dyn FnMut()>)
        };
        let metadata_closure = {
            let runtime = runtime.clone();
            let mut controller = controller;
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                if let Some(audio) = get_or_create_audio_element() {
                    controller.fold_metadata(audio.duration());
                }
            }) as Box<dyn FnMut()>)
        };
        let ended_closure = {
            let runtime = runtime.clone();
            let mut controller = controller;
            Closure::wrap(Box::new(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                controller.fold_ended();
            }) as Box<dyn FnMut()>)
        };

        audio.set_ontimeupdate(Some(time_closure.as_ref().unchecked_ref()));
        audio.set_onloadedmetadata(Some(metadata_closure.as_ref().unchecked_ref()));
        audio.set_onended(Some(ended_closure.as_ref().unchecked_ref()));
        time_closure.forget();
        metadata_closure.forget();
        ended_closure.forget();
    });

    // Swap the source when the loaded track changes.
    use_effect(move || {
        let url = source();
        if url == *last_src.peek() {
            return;
        }
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };
        match url.as_deref() {
            Some(url) => audio.set_src(url),
            None => {
                let _ = audio.remove_attribute("src");
                audio.load();
            }
        }
        last_src.set(url);
    });

    use_transport_sync(controller);

    rsx! {}
}
