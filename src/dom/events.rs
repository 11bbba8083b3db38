// ============================================================================
// EVENT HANDLING - Listeners de click
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Cada closure de click captura Rc<MintPageViewModel>. Con forget() cada
//   re-render dejaría uno vivo para siempre, así que el App los guarda en un
//   ListenerBag y lo vacía después de set_inner_html("").
// - Los listeners del provider (window.ethereum) NO pasan por aquí: los
//   gestiona Eip1193Provider con subscribe/unsubscribe.
// ============================================================================

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MouseEvent};

/// Closures del render actual; se sueltan al empezar el siguiente
pub struct ListenerBag<T = Closure<dyn FnMut(MouseEvent)>> {
    listeners: RefCell<Vec<T>>,
}

impl<T> ListenerBag<T> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn keep(&self, listener: T) {
        self.listeners.borrow_mut().push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Solo después de desmontar los elementos que los usan
    pub fn clear(&self) {
        let dropped = std::mem::take(&mut *self.listeners.borrow_mut());
        log::debug!("🧹 [EVENTS] {} listeners liberados", dropped.len());
    }
}

impl<T> Default for ListenerBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl ListenerBag {
    /// Helper para crear click handler simple
    pub fn on_click<F>(&self, element: &Element, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
        element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        self.keep(closure);
        Ok(())
    }
}
