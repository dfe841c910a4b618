use crate::fields::{DSTINTF, DSTIP, SERVICE, SRCINTF, SRCIP};
use crate::intermediate::FlowRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    SrcIntf,
    DstIntf,
    SrcIp,
    DstIp,
    Service,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::SrcIntf => SRCINTF,
            Column::DstIntf => DSTINTF,
            Column::SrcIp => SRCIP,
            Column::DstIp => DSTIP,
            Column::Service => SERVICE,
        }
    }
}

impl FlowRow {
    pub fn column(&self, column: Column) -> &str {
        match column {
            Column::SrcIntf => &self.srcintf,
            Column::DstIntf => &self.dstintf,
            Column::SrcIp => &self.srcip,
            Column::DstIp => &self.dstip,
            Column::Service => &self.service,
        }
    }

    pub fn column_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::SrcIntf => &mut self.srcintf,
            Column::DstIntf => &mut self.dstintf,
            Column::SrcIp => &mut self.srcip,
            Column::DstIp => &mut self.dstip,
            Column::Service => &mut self.service,
        }
    }
}
