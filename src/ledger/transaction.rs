use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Day-count basis for simple interest on certificates of deposit.
const DAYS_PER_YEAR: f64 = 360.0;

/// A monetary event registered on exactly one account.
///
/// Transactions are immutable once created. The only way to create one is the
/// [`Ledger`](crate::ledger::Ledger) registration API, which appends it to the
/// target account in the same step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
}

/// The sealed set of transaction variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TransactionKind {
    Deposit { value: f64 },
    Withdraw { value: f64 },
    /// Incoming half of a transfer, registered on the destination account.
    DepositLeg { value: f64, transfer: Uuid },
    /// Outgoing half of a transfer, registered on the source account.
    WithdrawLeg { value: f64, transfer: Uuid },
    CertificateOfDeposit(CertificateOfDeposit),
}

/// A fixed-term investment; registering one withdraws its principal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CertificateOfDeposit {
    pub principal: f64,
    pub days: u32,
    pub annual_rate: f64,
}

impl CertificateOfDeposit {
    /// Simple interest accrued over the certificate's term.
    pub fn earnings(&self) -> f64 {
        self.principal * (self.annual_rate / DAYS_PER_YEAR) * f64::from(self.days)
    }
}

impl Transaction {
    pub(crate) fn new(kind: TransactionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
        }
    }

    /// The amount this transaction was created with. For a certificate of
    /// deposit this is its principal.
    pub fn value(&self) -> f64 {
        match &self.kind {
            TransactionKind::Deposit { value }
            | TransactionKind::Withdraw { value }
            | TransactionKind::DepositLeg { value, .. }
            | TransactionKind::WithdrawLeg { value, .. } => *value,
            TransactionKind::CertificateOfDeposit(certificate) => certificate.principal,
        }
    }

    /// One fold step of a balance computation.
    pub fn apply_to(&self, balance: f64) -> f64 {
        match &self.kind {
            TransactionKind::Deposit { value } | TransactionKind::DepositLeg { value, .. } => {
                balance + value
            }
            TransactionKind::Withdraw { value } | TransactionKind::WithdrawLeg { value, .. } => {
                balance - value
            }
            TransactionKind::CertificateOfDeposit(certificate) => balance - certificate.principal,
        }
    }

    /// One human-readable line describing this transaction.
    pub fn humanize(&self) -> String {
        match &self.kind {
            TransactionKind::Deposit { value } => format!("Deposit of {value}"),
            TransactionKind::Withdraw { value } => format!("Withdrawal of {value}"),
            TransactionKind::DepositLeg { value, .. } => format!("Transfer of {value}"),
            TransactionKind::WithdrawLeg { value, .. } => format!("Transfer of {}", -value),
            TransactionKind::CertificateOfDeposit(certificate) => format!(
                "Certificate of deposit of {} for {} days at {}",
                certificate.principal, certificate.days, certificate.annual_rate
            ),
        }
    }

    /// The owning transfer, for transfer legs.
    pub fn transfer(&self) -> Option<Uuid> {
        match &self.kind {
            TransactionKind::DepositLeg { transfer, .. }
            | TransactionKind::WithdrawLeg { transfer, .. } => Some(*transfer),
            _ => None,
        }
    }

    /// Double-dispatch entry point: hands this transaction to the classifier
    /// method matching its variant.
    pub fn classify(&self, classifier: &mut dyn TransactionClassifier) {
        match &self.kind {
            TransactionKind::Deposit { value } => classifier.on_deposit(*value),
            TransactionKind::Withdraw { value } => classifier.on_withdraw(*value),
            TransactionKind::DepositLeg { value, transfer } => {
                classifier.on_deposit_leg(*value, *transfer)
            }
            TransactionKind::WithdrawLeg { value, transfer } => {
                classifier.on_withdraw_leg(*value, *transfer)
            }
            TransactionKind::CertificateOfDeposit(certificate) => {
                classifier.on_certificate_of_deposit(certificate)
            }
        }
    }
}

/// Per-variant dispatch with no-op defaults.
///
/// Folds that care about a subset of variants override only those methods;
/// every other variant contributes nothing.
pub trait TransactionClassifier {
    fn on_deposit(&mut self, _value: f64) {}
    fn on_withdraw(&mut self, _value: f64) {}
    fn on_deposit_leg(&mut self, _value: f64, _transfer: Uuid) {}
    fn on_withdraw_leg(&mut self, _value: f64, _transfer: Uuid) {}
    fn on_certificate_of_deposit(&mut self, _certificate: &CertificateOfDeposit) {}
}

/// A money movement between two accounts, owning exactly two legs.
///
/// Both legs exist together or not at all, share this transfer's value, and
/// point back to it through their `transfer` id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transfer {
    pub id: Uuid,
    value: f64,
    withdraw_leg: Uuid,
    deposit_leg: Uuid,
}

impl Transfer {
    pub(crate) fn new(id: Uuid, value: f64, withdraw_leg: Uuid, deposit_leg: Uuid) -> Self {
        Self {
            id,
            value,
            withdraw_leg,
            deposit_leg,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The leg registered on the source account.
    pub fn withdraw_leg(&self) -> Uuid {
        self.withdraw_leg
    }

    /// The leg registered on the destination account.
    pub fn deposit_leg(&self) -> Uuid {
        self.deposit_leg
    }

    /// The other half of the given leg, if the leg belongs to this transfer.
    pub fn partner_of(&self, leg: Uuid) -> Option<Uuid> {
        if leg == self.withdraw_leg {
            Some(self.deposit_leg)
        } else if leg == self.deposit_leg {
            Some(self.withdraw_leg)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certificate_earns_simple_interest_on_a_360_day_year() {
        let certificate = CertificateOfDeposit {
            principal: 100.0,
            days: 30,
            annual_rate: 0.1,
        };
        assert_eq!(certificate.earnings(), 100.0 * (0.1 / 360.0) * 30.0);
    }

    #[test]
    fn apply_to_signs_each_variant_correctly() {
        let transfer = Uuid::new_v4();
        let deposit = Transaction::new(TransactionKind::Deposit { value: 100.0 });
        let withdraw = Transaction::new(TransactionKind::Withdraw { value: 30.0 });
        let deposit_leg = Transaction::new(TransactionKind::DepositLeg {
            value: 20.0,
            transfer,
        });
        let withdraw_leg = Transaction::new(TransactionKind::WithdrawLeg {
            value: 20.0,
            transfer,
        });
        let certificate =
            Transaction::new(TransactionKind::CertificateOfDeposit(CertificateOfDeposit {
                principal: 50.0,
                days: 90,
                annual_rate: 0.05,
            }));

        assert_eq!(deposit.apply_to(0.0), 100.0);
        assert_eq!(withdraw.apply_to(100.0), 70.0);
        assert_eq!(deposit_leg.apply_to(0.0), 20.0);
        assert_eq!(withdraw_leg.apply_to(0.0), -20.0);
        assert_eq!(certificate.apply_to(100.0), 50.0);
    }

    #[test]
    fn humanize_uses_fixed_wording_per_variant() {
        let transfer = Uuid::new_v4();
        let deposit = Transaction::new(TransactionKind::Deposit { value: 100.0 });
        let withdraw = Transaction::new(TransactionKind::Withdraw { value: 50.0 });
        let deposit_leg = Transaction::new(TransactionKind::DepositLeg {
            value: 100.0,
            transfer,
        });
        let withdraw_leg = Transaction::new(TransactionKind::WithdrawLeg {
            value: 100.0,
            transfer,
        });
        let certificate =
            Transaction::new(TransactionKind::CertificateOfDeposit(CertificateOfDeposit {
                principal: 1000.0,
                days: 30,
                annual_rate: 0.1,
            }));

        assert_eq!(deposit.humanize(), "Deposit of 100");
        assert_eq!(withdraw.humanize(), "Withdrawal of 50");
        assert_eq!(deposit_leg.humanize(), "Transfer of 100");
        assert_eq!(withdraw_leg.humanize(), "Transfer of -100");
        assert_eq!(
            certificate.humanize(),
            "Certificate of deposit of 1000 for 30 days at 0.1"
        );
    }

    #[test]
    fn classify_dispatches_to_the_matching_handler_only() {
        #[derive(Default)]
        struct Seen {
            deposits: usize,
            legs: usize,
        }
        impl TransactionClassifier for Seen {
            fn on_deposit(&mut self, _value: f64) {
                self.deposits += 1;
            }
            fn on_deposit_leg(&mut self, _value: f64, _transfer: Uuid) {
                self.legs += 1;
            }
            fn on_withdraw_leg(&mut self, _value: f64, _transfer: Uuid) {
                self.legs += 1;
            }
        }

        let transfer = Uuid::new_v4();
        let transactions = [
            Transaction::new(TransactionKind::Deposit { value: 1.0 }),
            Transaction::new(TransactionKind::Withdraw { value: 1.0 }),
            Transaction::new(TransactionKind::DepositLeg {
                value: 1.0,
                transfer,
            }),
            Transaction::new(TransactionKind::WithdrawLeg {
                value: 1.0,
                transfer,
            }),
        ];

        let mut seen = Seen::default();
        for transaction in &transactions {
            transaction.classify(&mut seen);
        }
        assert_eq!(seen.deposits, 1);
        assert_eq!(seen.legs, 2);
    }

    #[test]
    fn partner_of_resolves_the_opposite_leg() {
        let withdraw_leg = Uuid::new_v4();
        let deposit_leg = Uuid::new_v4();
        let transfer = Transfer::new(Uuid::new_v4(), 100.0, withdraw_leg, deposit_leg);

        assert_eq!(transfer.partner_of(withdraw_leg), Some(deposit_leg));
        assert_eq!(transfer.partner_of(deposit_leg), Some(withdraw_leg));
        assert_eq!(transfer.partner_of(Uuid::new_v4()), None);
    }
}
