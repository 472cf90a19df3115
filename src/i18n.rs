//! Message catalog
//!
//! A small static catalog implementing [`Translate`]. Lookups fall back to
//! English, then to the key itself.

use crate::ports::Translate;

const EN: &[(&str, &str)] = &[
    ("common.next", "Next"),
    ("common.save", "Save"),
    ("common.back", "Back"),
    ("common.close", "Close"),
    ("iou.amount", "Amount"),
    ("iou.requestMoney", "Request money"),
    ("iou.splitBill", "Split bill"),
    ("iou.sendMoney", "Send money"),
    ("iou.request", "Request {amount}"),
    ("iou.split", "Split {amount}"),
    ("iou.send", "Send {amount}"),
    ("iou.participants", "Participants"),
    ("iou.to", "To"),
    ("iou.whatsItFor", "What's it for?"),
    ("iou.settleElsewhere", "I'll settle up elsewhere"),
    ("iou.settlePaypalMe", "Pay with PayPal.me"),
    ("iou.settleExpensify", "Pay with Expensify"),
    ("iou.error.genericCreateFailureMessage", "Unexpected error, please try again"),
];

const ES: &[(&str, &str)] = &[
    ("common.next", "Siguiente"),
    ("common.save", "Guardar"),
    ("common.back", "Atrás"),
    ("common.close", "Cerrar"),
    ("iou.amount", "Importe"),
    ("iou.requestMoney", "Pedir dinero"),
    ("iou.splitBill", "Dividir factura"),
    ("iou.sendMoney", "Enviar dinero"),
    ("iou.request", "Pedir {amount}"),
    ("iou.split", "Dividir {amount}"),
    ("iou.send", "Enviar {amount}"),
    ("iou.participants", "Participantes"),
    ("iou.to", "A"),
    ("iou.whatsItFor", "¿Para qué es?"),
    ("iou.settleElsewhere", "Pagaré de otra forma"),
    ("iou.settlePaypalMe", "Pagar con PayPal.me"),
    ("iou.settleExpensify", "Pagar con Expensify"),
    ("iou.error.genericCreateFailureMessage", "Error inesperado, por favor inténtalo de nuevo"),
];

/// Static message catalog for one locale
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    messages: &'static [(&'static str, &'static str)],
}

impl Catalog {
    /// Catalog for a locale tag such as "en", "es" or "es-MX"
    pub fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        let messages = match language.as_str() {
            "es" => ES,
            _ => EN,
        };
        Self { messages }
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        self.messages
            .iter()
            .chain(EN.iter())
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self { messages: EN }
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(message) => message.to_string(),
            None => {
                tracing::warn!(key, "missing translation");
                key.to_string()
            }
        }
    }
}
