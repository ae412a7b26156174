//! 요청 세대 추적
//!
//! 컬렉션마다 세대 카운터를 두고, 요청을 시작할 때 티켓을 발급한다.
//! 더 새로운 요청이 시작된 뒤에 도착한 응답은 버린다.

/// 발급된 요청 티켓
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// 세대 카운터
#[derive(Debug, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    /// 새 티켓 발급（이전 티켓은 모두 무효）
    pub fn issue(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}
