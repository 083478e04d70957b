use crate::domain::models::bank::Bank as DomainBank;
use shared::Bank as SharedBank;

/// Mapper to convert between shared Bank DTOs and domain Bank models.
pub struct BankMapper;

impl BankMapper {
    /// Converts a shared Bank DTO to a domain Bank model.
    pub fn to_domain(dto: SharedBank) -> DomainBank {
        DomainBank {
            account_number: dto.account_number,
            trust: dto.trust,
            transaction_fee: dto.transaction_fee,
        }
    }

    /// Converts a domain Bank model to a shared Bank DTO.
    pub fn to_dto(domain: DomainBank) -> SharedBank {
        SharedBank {
            account_number: domain.account_number,
            trust: domain.trust,
            transaction_fee: domain.transaction_fee,
        }
    }

    pub fn to_dto_list(domain_banks: Vec<DomainBank>) -> Vec<SharedBank> {
        domain_banks.into_iter().map(Self::to_dto).collect()
    }
}
