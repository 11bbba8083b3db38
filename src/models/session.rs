use serde::{Deserialize, Serialize};

/// Foto del estado de sesión de wallet (transitorio, nunca se persiste)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Primera cuenta autorizada por la wallet
    pub connected_account: Option<String>,

    /// Último chain id leído del provider
    pub current_network_id: Option<u64>,

    pub is_mint_in_progress: bool,

    /// Transacción pedida a la wallet, todavía sin hash
    pub is_submitting: bool,

    pub is_connecting: bool,
}

impl SessionSnapshot {
    pub fn is_connected(&self) -> bool {
        self.connected_account.is_some()
    }

    /// El botón principal muestra la animación de carga
    pub fn is_busy(&self) -> bool {
        self.is_connecting || self.is_submitting || self.is_mint_in_progress
    }

    /// Dirección abreviada para la UI: 0x1234…abcd
    pub fn short_account(&self) -> Option<String> {
        self.connected_account.as_ref().map(|account| {
            let chars: Vec<char> = account.chars().collect();
            if chars.len() <= 10 {
                account.clone()
            } else {
                let head: String = chars[..6].iter().collect();
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("{}…{}", head, tail)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_idle() {
        let session = SessionSnapshot::default();
        assert!(!session.is_connected());
        assert!(!session.is_busy());
    }

    #[test]
    fn test_short_account() {
        let session = SessionSnapshot {
            connected_account: Some("0x1234567890abcdef1234567890abcdef12345678".to_string()),
            ..Default::default()
        };
        assert_eq!(session.short_account().as_deref(), Some("0x1234…5678"));
    }

    #[test]
    fn test_short_account_counts_characters_not_bytes() {
        let session = SessionSnapshot {
            connected_account: Some("0xñañañañañañañañaña".to_string()),
            ..Default::default()
        };
        assert_eq!(session.short_account().as_deref(), Some("0xñaña…ñaña"));

        let short = SessionSnapshot {
            connected_account: Some("0xäöüäöüäö".to_string()),
            ..Default::default()
        };
        assert_eq!(short.short_account().as_deref(), Some("0xäöüäöüäö"));
    }

    #[test]
    fn test_submitting_is_busy() {
        let session = SessionSnapshot {
            is_submitting: true,
            ..Default::default()
        };
        assert!(session.is_busy());
    }
}
