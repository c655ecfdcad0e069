mod fcfs;
pub use fcfs::Fcfs;

mod sjf;
pub use sjf::Sjf;

mod priority;
pub use priority::Priority;

mod round_robin;
pub use round_robin::RoundRobin;
